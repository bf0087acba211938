use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::cors;
use crate::web::models::ErrorResponse;

pub const APOLOGY_MESSAGE: &str =
    "I apologize for the technical difficulty. Please try again or contact support if the issue persists.";
const RATE_LIMIT_MESSAGE: &str = "Too many questions at once. Please wait a moment and try again.";
const QUOTA_MESSAGE: &str = "The assistant is currently unavailable. Please contact support.";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingCredential,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Service temporarily unavailable. Please contact support.")]
    QuotaExhausted,

    #[error("AI Gateway returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("AI Gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI Gateway response could not be parsed: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("AI Gateway returned an unusable tool call: {0}")]
    MalformedToolCall(String),
}

impl RelayError {
    /// User-facing text that never carries internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::RateLimited => RATE_LIMIT_MESSAGE,
            RelayError::QuotaExhausted => QUOTA_MESSAGE,
            _ => APOLOGY_MESSAGE,
        }
    }
}

impl ResponseError for RelayError {
    // Input errors stay on 500 so existing UI clients keep matching on payload shape.
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RelayError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(cors::allow_origin())
            .insert_header(cors::allow_headers())
            .json(ErrorResponse {
                error: self.to_string(),
                message: self.user_message().to_string(),
            })
    }
}
