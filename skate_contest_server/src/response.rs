use axum::{response::{IntoResponse, Response}, Json};
use hyper::StatusCode;
use serde::{Serialize, Deserialize};
use skate_contest_backend::{draw::HeatDrawError, errors::ContestError, registration::RegistrationError, scoring::ScoringError};
use skate_contest_entities::domain::category::CategoryParseError;
use tracing::error;


#[derive(Debug, Clone)]
pub struct APIError {
    pub message: String,
    pub code: StatusCode
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct APIErrorResponse {
    pub message: String
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    if let Some(err) = err.downcast_ref::<ContestError>() {
        return match err {
            ContestError::UnknownCategory(_) | ContestError::UnknownParticipant(_) | ContestError::UnknownHeat(_) => StatusCode::NOT_FOUND,
            ContestError::DuplicateCategory(_) | ContestError::DuplicateAccessCode(_) | ContestError::DuplicateRun(_) => StatusCode::CONFLICT,
            ContestError::NotEnrolled { .. } | ContestError::InvalidHeatConfig => StatusCode::BAD_REQUEST,
            ContestError::AccessCodeSpaceExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        };
    }
    if err.is::<RegistrationError>() || err.is::<ScoringError>() || err.is::<HeatDrawError>() || err.is::<CategoryParseError>() {
        return StatusCode::BAD_REQUEST;
    }
    StatusCode::INTERNAL_SERVER_ERROR
}

impl From<anyhow::Error> for APIError {
    fn from(err: anyhow::Error) -> Self {
        error!("Error while handling request {}", err);
        APIError { message: err.to_string(), code: status_for(&err) }
    }
}

impl From<CategoryParseError> for APIError {
    fn from(err: CategoryParseError) -> Self {
        anyhow::Error::from(err).into()
    }
}

impl IntoResponse for APIError
{
    fn into_response(self) -> Response {
        (self.code, Json(APIErrorResponse { message: self.message })).into_response()
    }
}

impl From<(StatusCode, &str)> for APIError {
    fn from((code, message): (StatusCode, &str)) -> Self {
        error!("Error while handling request {}", message);
        APIError { message: message.to_string(), code }
    }
}

#[cfg(test)]
mod test {
    use hyper::StatusCode;
    use skate_contest_backend::errors::ContestError;
    use skate_contest_entities::prelude::*;

    use super::APIError;

    #[test]
    fn test_contest_errors_map_to_status() {
        let cases = [
            (ContestError::UnknownHeat(Uuid::from_u128(1)), StatusCode::NOT_FOUND),
            (ContestError::DuplicateCategory(Category::girls()), StatusCode::CONFLICT),
            (ContestError::InvalidHeatConfig, StatusCode::BAD_REQUEST),
            (ContestError::AccessCodeSpaceExhausted, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, code) in cases {
            assert_eq!(APIError::from(anyhow::Error::from(err)).code, code);
        }
    }

    #[test]
    fn test_unrelated_errors_are_internal() {
        let err = APIError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "disk on fire");
    }
}
