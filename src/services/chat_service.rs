use std::sync::Arc;

use crate::{
    constants::prompts::{EMPTY_RESPONSE_MESSAGE, OUT_OF_SCOPE_MESSAGE},
    models::domain::{FormattedReply, UserProfile},
    services::{
        completion_client::CompletionClient, topic_classifier::TopicClassifier,
        tutoring_responder::TutoringResponder,
    },
};

/// Runs one chat turn: topic gate first, tutoring answer only when the gate
/// passes. Every outcome, including refusals and fallbacks, comes back as a
/// [`FormattedReply`].
pub struct ChatService {
    classifier: TopicClassifier,
    responder: TutoringResponder,
}

impl ChatService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            classifier: TopicClassifier::new(client.clone()),
            responder: TutoringResponder::new(client),
        }
    }

    pub async fn handle_message(&self, message: &str, profile: &UserProfile) -> FormattedReply {
        let in_scope = match self.classifier.classify(message).await {
            Ok(in_scope) => in_scope,
            Err(e) => {
                // Provider failures are handled like a "no" from the filter.
                log::warn!("Topic filter failed, treating message as out of scope: {}", e);
                false
            }
        };

        if !in_scope {
            return FormattedReply::notice(OUT_OF_SCOPE_MESSAGE);
        }

        let answer = self.responder.respond(message, profile).await;
        let reply = FormattedReply::from_model_text(&answer);
        if reply.is_empty() {
            log::warn!("Tutoring answer had no renderable content; returning fallback");
            return FormattedReply::notice(EMPTY_RESPONSE_MESSAGE);
        }
        reply
    }
}
