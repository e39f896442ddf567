use super::*;

use crate::catalog::TourCatalog;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)));
    cfg.service(web::resource("{code}").route(web::get().to(view)));
}

async fn list(reg: Data<Registry>) -> ::aw::Result<impl Responder> {
    let packages = TourCatalog::new(&reg.db).packages().await?;

    Ok(Json(packages))
}

async fn view(reg: Data<Registry>, path: Path<String>) -> ::aw::Result<impl Responder> {
    let package = TourCatalog::new(&reg.db).package(&path.into_inner()).await?;

    Ok(Json(package))
}
