use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub const QUIZ_INVALID_DATA_MESSAGE: &str = "Invalid quiz data received";
pub const QUIZ_FAILED_MESSAGE: &str = "Failed to generate quiz";
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to process the request";

/// Failure of a single call to the completion provider.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Request(String),

    #[error("Completion request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Completion response contained no choices")]
    EmptyChoice,
}

impl From<async_openai::error::OpenAIError> for CompletionError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        CompletionError::Request(err.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum QuizGenerationError {
    #[error(transparent)]
    Provider(#[from] CompletionError),

    #[error("No JSON array found in completion")]
    Extraction,

    #[error("Quiz payload is not valid JSON: {0}")]
    Parse(String),

    #[error("Question {index} is invalid: {reason}")]
    Validation { index: usize, reason: String },
}

impl QuizGenerationError {
    /// Message shown to end users; provider and parser details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            QuizGenerationError::Provider(_) => QUIZ_FAILED_MESSAGE,
            QuizGenerationError::Extraction
            | QuizGenerationError::Parse(_)
            | QuizGenerationError::Validation { .. } => QUIZ_INVALID_DATA_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Quiz generation failed: {0}")]
    QuizGeneration(#[from] QuizGenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_) => self.to_string(),
            AppError::QuizGeneration(err) => err.public_message().to_string(),
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::QuizGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
