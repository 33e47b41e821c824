use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_service::ChatService,
        completion_client::{CompletionClient, OpenAiCompatibleClient},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompatibleClient::from_config(&config));
        log::info!(
            "Using completion model {} at {}",
            client.model(),
            config.completion_api_base
        );
        Self::with_client(config, client)
    }

    /// Builds the services around an already constructed completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(client.clone())),
            quiz_service: Arc::new(QuizService::new(client)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_shareable_across_workers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }

    #[test]
    fn test_app_state_new_keeps_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.completion_model, "gemini-2.0-flash");
    }
}
