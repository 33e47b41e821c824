use serde::Serialize;

use crate::models::domain::Quiz;

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponseDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponseDto {
    pub questions: Quiz,
}
