pub mod chat_turn;
pub mod formatted_reply;
pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub mod user_profile;
pub use chat_turn::{ChatTurn, Sender};
pub use formatted_reply::{FormattedReply, ReplyBlock};
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use quiz_result::{QuestionResult, QuizResult};
pub use user_profile::UserProfile;
