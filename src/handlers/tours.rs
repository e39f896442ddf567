use super::*;

use crate::catalog::{CatalogError, TourCatalog};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)));

    cfg.service(
        web::resource("search/findByTourPackageCode").route(web::get().to(find_by_package_code)),
    );

    cfg.service(web::scope("{tour_id}/ratings").configure(super::ratings::config));

    cfg.service(web::resource("{tour_id}").route(web::get().to(view)));
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::TourNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::PackageNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DbErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            CatalogError::DbErr(e) => internal_error("tour catalog", e),
            _ => text_response(self.status_code(), self.to_string()),
        }
    }
}

async fn list(
    reg: Data<Registry>,
    Query(page): Query<PageRequest>,
) -> ::aw::Result<impl Responder> {
    let tours = TourCatalog::new(&reg.db).tours(page).await?;

    Ok(Json(tours))
}

async fn view(reg: Data<Registry>, path: Path<i32>) -> ::aw::Result<impl Responder> {
    let tour = TourCatalog::new(&reg.db).tour(path.into_inner()).await?;

    Ok(Json(tour))
}

#[derive(Debug, Deserialize)]
struct ParamPackageCode {
    code: String,
}

async fn find_by_package_code(
    reg: Data<Registry>,
    Query(ParamPackageCode { code }): Query<ParamPackageCode>,
    Query(page): Query<PageRequest>,
) -> ::aw::Result<impl Responder> {
    let tours = TourCatalog::new(&reg.db)
        .tours_by_package_code(&code, page)
        .await?;

    Ok(Json(tours))
}
