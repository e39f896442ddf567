use super::*;

use crate::manager::{RatingManager, RatingManagerError};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create))
            .route(web::get().to(list))
            .route(web::put().to(update_full))
            .route(web::patch().to(update_partial)),
    );

    cfg.service(web::resource("average").route(web::get().to(average)));

    // customer ids only, so `average` never reaches `delete`
    cfg.service(web::resource(r"{customer_id:-?\d+}").route(web::delete().to(delete)));
}

impl ResponseError for RatingManagerError {
    fn status_code(&self) -> StatusCode {
        match self {
            RatingManagerError::TourNotFound(_) => StatusCode::NOT_FOUND,
            RatingManagerError::RatingNotFound(_) => StatusCode::NOT_FOUND,
            RatingManagerError::AlreadyRated(_) => StatusCode::CONFLICT,
            RatingManagerError::DbErr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            RatingManagerError::DbErr(e) => internal_error("tour ratings", e),
            _ => text_response(self.status_code(), self.to_string()),
        }
    }
}

async fn create(
    reg: Data<Registry>,
    path: Path<i32>,
    Json(dto): Json<RatingDto>,
) -> ::aw::Result<impl Responder> {
    let dto = validated(dto)?;

    RatingManager::new(&reg.db)
        .create(path.into_inner(), dto)
        .await?;

    Ok(HttpResponse::Created().finish())
}

async fn list(
    reg: Data<Registry>,
    path: Path<i32>,
    Query(page): Query<PageRequest>,
) -> ::aw::Result<impl Responder> {
    let ratings = RatingManager::new(&reg.db)
        .list(path.into_inner(), page)
        .await?;

    Ok(Json(ratings))
}

async fn average(reg: Data<Registry>, path: Path<i32>) -> ::aw::Result<impl Responder> {
    let average = RatingManager::new(&reg.db)
        .average(path.into_inner())
        .await?;

    Ok(Json(average))
}

async fn update_full(
    reg: Data<Registry>,
    path: Path<i32>,
    Json(dto): Json<RatingDto>,
) -> ::aw::Result<impl Responder> {
    let dto = validated(dto)?;

    let rating = RatingManager::new(&reg.db)
        .update_full(path.into_inner(), dto)
        .await?;

    Ok(Json(rating))
}

async fn update_partial(
    reg: Data<Registry>,
    path: Path<i32>,
    Json(patch): Json<RatingPatch>,
) -> ::aw::Result<impl Responder> {
    let patch = validated(patch)?;

    let rating = RatingManager::new(&reg.db)
        .update_partial(path.into_inner(), patch)
        .await?;

    Ok(Json(rating))
}

async fn delete(reg: Data<Registry>, path: Path<(i32, i32)>) -> ::aw::Result<impl Responder> {
    let (tour_id, customer_id) = path.into_inner();

    RatingManager::new(&reg.db)
        .delete(tour_id, customer_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
