use ::aw::{
    body::BoxBody,
    http::{header, StatusCode},
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder, ResponseError,
};
use ::log::{error, warn};
use ::serde::Deserialize;
use ::serde_valid::Validate;

use crate::data::*;
use crate::state::*;

mod packages;
mod ratings;
mod tours;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| RequestError::Malformed(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| RequestError::Malformed(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| RequestError::Malformed(err.to_string()).into()),
    );

    cfg.service(web::scope("/tours").configure(tours::config));
    cfg.service(web::scope("/packages").configure(packages::config));
}

/// request rejected before reaching the database
#[derive(Debug, ::thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Malformed(String),
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::Validation(_) => StatusCode::BAD_REQUEST,
            RequestError::Malformed(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        text_response(self.status_code(), self.to_string())
    }
}

fn validated<T: Validate>(value: T) -> Result<T, RequestError> {
    if let Err(errors) = value.validate() {
        warn!("rejected request payload: {}", errors);
        return Err(RequestError::Validation(errors.to_string()));
    }

    Ok(value)
}

/// error bodies are the plain message
fn text_response(status: StatusCode, body: String) -> HttpResponse<BoxBody> {
    let mut res = HttpResponse::new(status);
    let h_value = header::HeaderValue::from_static("text/plain; charset=utf-8");
    res.headers_mut().insert(header::CONTENT_TYPE, h_value);
    res.set_body(BoxBody::new(body))
}

fn internal_error(context: &str, err: &dyn std::error::Error) -> HttpResponse<BoxBody> {
    error!("{}: {}", context, err);
    text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        String::from("Internal server error"),
    )
}
