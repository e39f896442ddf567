pub use ::aw::{
    test,
    web::{self, Data, Json, Query},
    Responder,
};

pub use ::serde::{Deserialize, Serialize};
pub use ::serde_json::{json, Value};

pub mod tapi;

#[allow(unused)]
pub const TEST_URL_GET_RATINGS: &str = "/test/ratings";
