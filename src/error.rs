use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failures raised by the record store.
#[derive(Debug, Display)]
pub enum StoreError {
    /// A unique key (e.g. user email) already holds this value.
    #[display(fmt = "{}", _0)]
    Duplicate(String),
    #[display(fmt = "{}", _0)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate(db_err.message().to_string());
            }
        }
        StoreError::Database(e)
    }
}

/// Errors returned to HTTP callers as `{"error": "..."}`.
#[derive(Debug, Display, PartialEq)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{}", _0)]
    Unauthorized(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "{}", _0)]
    Conflict(String),
    /// Underlying store failure. The raw message is surfaced to the caller.
    #[display(fmt = "{}", _0)]
    Store(String),
    #[display(fmt = "{}", _0)]
    Internal(String),
}

impl ApiError {
    /// Same message for an unknown email and a wrong password.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized("Invalid credentials".to_string())
    }

    pub fn missing_fields(fields: &[&str]) -> Self {
        ApiError::Validation(format!("Missing required fields: {}", fields.join(", ")))
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(msg) => ApiError::Conflict(msg),
            StoreError::Database(e) => ApiError::Store(e.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            ApiError::missing_fields(&["email"]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::invalid_credentials().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Leave not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Store("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_fields_lists_every_name() {
        let err = ApiError::missing_fields(&["start_date", "leave_type"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: start_date, leave_type"
        );
    }

    #[test]
    fn duplicate_store_error_becomes_conflict() {
        let err: ApiError = StoreError::Duplicate("Duplicate entry".into()).into();
        assert_eq!(err, ApiError::Conflict("Duplicate entry".into()));
    }
}
