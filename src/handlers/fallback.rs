use actix_web::{HttpRequest, HttpResponse};

use crate::errors::ApiError;

/// Any path no route matches.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("Path not found: {}", req.path())))
}

/// A known path hit with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(format!(
        "{} not allowed for {}",
        req.method(),
        req.path()
    )))
}
