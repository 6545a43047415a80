//! Status-coded response envelopes and the helpers that build them.

use crate::error::{ServerError, ValidationError};

/// Incoming request as seen by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest<T> {
    pub body: T,
}

impl<T> HttpRequest<T> {
    pub fn new(body: T) -> Self {
        Self { body }
    }
}

/// Every body a controller can answer with. Each variant fixes its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody<T> {
    Ok(T),
    BadRequest(ValidationError),
    ServerError(ServerError),
}

impl<T> ResponseBody<T> {
    pub fn status_code(&self) -> u16 {
        match self {
            ResponseBody::Ok(_) => 200,
            ResponseBody::BadRequest(_) => 400,
            ResponseBody::ServerError(_) => 500,
        }
    }
}

/// Outgoing response. The status code is derived from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    pub fn new(body: ResponseBody<T>) -> Self {
        Self { body }
    }

    pub fn status_code(&self) -> u16 {
        self.body.status_code()
    }
}

/// 400 carrying the validation failure.
pub fn bad_request<T>(error: ValidationError) -> HttpResponse<T> {
    HttpResponse::new(ResponseBody::BadRequest(error))
}

/// 500 carrying only the generic [`ServerError`] marker.
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse::new(ResponseBody::ServerError(ServerError))
}

/// 200 carrying `data`.
pub fn success<T>(data: T) -> HttpResponse<T> {
    HttpResponse::new(ResponseBody::Ok(data))
}
