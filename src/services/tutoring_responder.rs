use std::sync::Arc;

use crate::{
    constants::prompts::{tutoring_prompt, EMPTY_RESPONSE_MESSAGE, RESPONSE_ERROR_MESSAGE},
    models::domain::UserProfile,
    services::completion_client::CompletionClient,
};

/// Produces the tutoring answer for an in-scope message. Never fails; provider
/// errors and empty completions degrade to a canned apology.
pub struct TutoringResponder {
    client: Arc<dyn CompletionClient>,
}

impl TutoringResponder {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn respond(&self, message: &str, profile: &UserProfile) -> String {
        match self.client.complete(&tutoring_prompt(message, profile)).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::warn!("Tutoring completion was empty; returning fallback");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
            Err(e) => {
                log::error!("Error generating tutoring response: {}", e);
                RESPONSE_ERROR_MESSAGE.to_string()
            }
        }
    }
}
