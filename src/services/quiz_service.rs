use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    constants::prompts::quiz_prompt,
    errors::QuizGenerationError,
    models::domain::{Quiz, UserProfile},
    services::completion_client::CompletionClient,
};

static JSON_ARRAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("JSON_ARRAY_REGEX is a valid regex pattern"));

pub struct QuizService {
    client: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Requests a quiz on `topic` and validates the model output. One
    /// completion call; nothing is retried.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        profile: &UserProfile,
    ) -> Result<Quiz, QuizGenerationError> {
        let text = self.client.complete(&quiz_prompt(topic, profile)).await?;
        log::debug!("Raw quiz completion for topic {:?}: {}", topic, text);

        let quiz = parse_quiz(&text)?;
        log::info!("Generated quiz with {} questions on {:?}", quiz.len(), topic);
        Ok(quiz)
    }
}

/// Greedy match from the first `[` to the last `]`, so prose or code fences
/// around the array are ignored.
pub fn extract_json_array(text: &str) -> Option<&str> {
    JSON_ARRAY_REGEX.find(text).map(|m| m.as_str())
}

pub fn parse_quiz(text: &str) -> Result<Quiz, QuizGenerationError> {
    let candidate = extract_json_array(text).ok_or(QuizGenerationError::Extraction)?;
    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| QuizGenerationError::Parse(e.to_string()))?;
    Quiz::from_json(&value)
}
