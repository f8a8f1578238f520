use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request requires a signed in user. Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session points at a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response so the client signs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the permission required by the endpoint.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied action, logged only
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password during sign-in.
    ///
    /// The two cases share one message so that sign-in does not reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account's profile is inactive or deleted.
    #[error("User {0} attempted to sign in with an inactive account")]
    AccountInactive(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `AccountInactive` → 403 Forbidden
///
/// The detailed reason is logged at debug level while the client only sees a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You need to sign in first")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to access this resource",
            ),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "This account has been disabled"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
