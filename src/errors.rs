use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Rejections raised by the sheet controller. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please enter your name.")]
    EmptyName,

    #[error("User \"{0}\" already picked days this month.")]
    AlreadyRegistered(String),

    #[error("Day {0} has already reached its maximum quota.")]
    QuotaExceeded(u8),

    #[error("You can only pick up to {0} days.")]
    PersonalLimitExceeded(usize),

    #[error("You must pick at least one day.")]
    NoSelection,

    #[error("\"{0}\" is still picking days; submit before starting a new session.")]
    SessionActive(String),

    #[error("Start a session with your name first.")]
    NoActiveSession,

    #[error("Day {0} is not on this month's sheet.")]
    UnknownDay(u32),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for AppError {}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        let status = match err {
            SignupError::EmptyName | SignupError::UnknownDay(_) => StatusCode::BAD_REQUEST,
            SignupError::NoSelection => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::AlreadyRegistered(_)
            | SignupError::QuotaExceeded(_)
            | SignupError::PersonalLimitExceeded(_)
            | SignupError::SessionActive(_)
            | SignupError::NoActiveSession => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
