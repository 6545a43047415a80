//! Request body error handling.

use actix_web::{HttpResponse, error, web};
use signup_shared::ErrorResponse;

/// Error `name` reported when the request body cannot be parsed.
pub const BODY_ERROR_NAME: &str = "body";

/// JSON extractor configuration answering malformed bodies with a 400
/// [`ErrorResponse`] instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        let body = ErrorResponse::new(BODY_ERROR_NAME, err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
