use std::sync::Arc;

use crate::{
    constants::prompts::topic_filter_prompt, errors::CompletionError,
    services::completion_client::CompletionClient,
};

/// Decides whether a learner message is in scope for tutoring.
pub struct TopicClassifier {
    client: Arc<dyn CompletionClient>,
}

impl TopicClassifier {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns `Ok(true)` only when the model answers exactly "yes" after
    /// trimming and lowercasing. Empty or malformed answers are `Ok(false)`;
    /// provider failures are returned to the caller.
    pub async fn classify(&self, message: &str) -> Result<bool, CompletionError> {
        let answer = self.client.complete(&topic_filter_prompt(message)).await?;
        let in_scope = is_affirmative(&answer);

        if !in_scope {
            log::debug!("Topic filter answered {:?}; treating as out of scope", answer);
        }

        Ok(in_scope)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}
