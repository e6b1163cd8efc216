use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Failure kinds surfaced by the account service and its collaborators.
///
/// `NotFound`, `AlreadyExists` and `AuthenticationFailed` are deterministic
/// business-rule rejections; `Invalid` covers request validation at the HTTP
/// boundary; `Internal` wraps store/hash/token faults.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    NotFound(String),
    #[error("account with email {0} already exists")]
    AlreadyExists(String),
    #[error("invalid credentials")]
    AuthenticationFailed,
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AccountError {
    fn from(e: sqlx::Error) -> Self {
        AccountError::Internal(e.into())
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = match &self {
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::AlreadyExists(_) => StatusCode::CONFLICT,
            AccountError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AccountError::Invalid(_) => StatusCode::BAD_REQUEST,
            AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AccountError::Internal(e) => {
                error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_map_to_distinct_statuses() {
        let cases = [
            (
                AccountError::NotFound("account with id 7 not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AccountError::AlreadyExists("a@x.com".into()),
                StatusCode::CONFLICT,
            ),
            (AccountError::AuthenticationFailed, StatusCode::UNAUTHORIZED),
            (
                AccountError::Invalid("invalid email".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AccountError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn sqlx_errors_become_internal() {
        let err = AccountError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AccountError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
