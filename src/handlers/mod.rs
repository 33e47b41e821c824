use actix_web::web;

use crate::errors::AppError;

pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;

pub use chat_handler::{chat, chat_greeting};
pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, score_quiz};

/// Registers every route. Malformed JSON bodies become `400` validation errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(health_check)
    .service(chat)
    .service(chat_greeting)
    .service(generate_quiz)
    .service(score_quiz);
}
