use super::*;

use crate::state::Registry;

#[derive(Debug, Serialize, Deserialize)]
pub struct GetRatings {
    tour_id: i32,
}

/// raw `tour_rating` rows, bypassing the rating endpoints
pub(crate) async fn get_ratings(
    Query(GetRatings { tour_id }): Query<GetRatings>,
    reg: Data<Registry>,
) -> impl Responder {
    let ratings = crate::db::ratings_of(&reg.db, tour_id).await.unwrap();

    Json(ratings)
}
