pub mod chat_service;
pub mod completion_client;
pub mod quiz_grader;
pub mod quiz_service;
pub mod topic_classifier;
pub mod tutoring_responder;
