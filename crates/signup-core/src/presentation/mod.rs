//! Framework-agnostic presentation layer: request/response envelopes, response
//! helpers and controllers.

mod http;
mod signup;

pub use http::{HttpRequest, HttpResponse, ResponseBody, bad_request, server_error, success};
pub use signup::SignUpController;
