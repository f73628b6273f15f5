use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

/// Every failure a request can end in. The message is sent to the client as is.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or malformed field.
    #[display("{}", _0)]
    Validation(String),
    #[display("{}", _0)]
    NotFound(String),
    /// Route/body id mismatch, or a transition the order's state forbids.
    #[display("{}", _0)]
    Conflict(String),
    #[display("{}", _0)]
    MethodNotAllowed(String),
    #[display("Something went wrong!")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepoErr {
    #[error("not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MethodNotAllowed("x".into()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn error_body_carries_message() {
        let resp = ApiError::NotFound("Dish does not exist: 7".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["error"], "Dish does not exist: 7");
    }
}
