use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::services::request_builder::FormField;

/// Every failure the trip client can surface to a caller.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("request is not submittable, missing: {}", join_fields(.missing))]
    Validation { missing: Vec<FormField> },

    #[error("a trip request is already in flight")]
    InFlight,

    #[error("response arrived for a trip that was already abandoned")]
    Superseded,

    #[error("no trip plan is loaded")]
    NoPlan,

    #[error("invalid trip id: {0:?}")]
    InvalidTripId(String),

    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("trip generation failed with status {status}")]
    Generation { status: u16, body: String },

    #[error("malformed trip plan: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),

    #[error("session state is unavailable")]
    SessionPoisoned,
}

pub type Result<T> = std::result::Result<T, TripError>;

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResponseError for TripError {
    fn status_code(&self) -> StatusCode {
        match self {
            TripError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TripError::InFlight | TripError::Superseded => StatusCode::CONFLICT,
            TripError::NoPlan => StatusCode::NOT_FOUND,
            TripError::InvalidTripId(_) => StatusCode::BAD_REQUEST,
            TripError::Transport(_) | TripError::Generation { .. } | TripError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            TripError::Url(_) | TripError::SessionPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            TripError::Validation { missing } => json!({
                "error": self.to_string(),
                "missing": missing,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
