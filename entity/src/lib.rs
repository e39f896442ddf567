use ::sea_orm::{entity::prelude::*, ActiveValue};
use ::serde::{Deserialize, Serialize};

pub mod prelude;

pub mod tour;
pub mod tour_package;
pub mod tour_rating;

fn now() -> ::chrono::NaiveDateTime {
    ::chrono::Utc::now().naive_utc()
}
