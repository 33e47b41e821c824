use serde::{Deserialize, Serialize};

pub const GREETING_MESSAGE: &str = "Hello! How can I help you with your studies today?";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the visible chat transcript.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatTurn {
    pub message: String,
    pub sender: Sender,
}

impl ChatTurn {
    pub fn bot(message: impl Into<String>) -> Self {
        ChatTurn {
            message: message.into(),
            sender: Sender::Bot,
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        ChatTurn {
            message: message.into(),
            sender: Sender::User,
        }
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING_MESSAGE)
    }
}
