use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::models::domain::UserProfile;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    #[validate(length(min = 1, max = 4000))]
    pub message: String,

    #[validate(nested)]
    pub user_info: UserProfile,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(nested)]
    pub user_info: UserProfile,
}

/// Answers picked by the learner for a quiz the client already holds.
/// Questions stay untyped here and are re-validated before grading.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuizRequestDto {
    #[validate(length(min = 1, max = 50))]
    pub questions: Vec<Value>,

    pub selected_answers: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_json() -> &'static str {
        r#"{"ageRange":"15-18","educationLevel":"High School","grade":"9-12"}"#
    }

    #[test]
    fn chat_request_deserializes_camel_case() {
        let json = format!(r#"{{"message":"Explain osmosis","userInfo":{}}}"#, profile_json());
        let request: ChatRequestDto = serde_json::from_str(&json).expect("request should parse");

        assert_eq!(request.message, "Explain osmosis");
        assert_eq!(request.user_info.grade, "9-12");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn chat_request_rejects_empty_message() {
        let json = format!(r#"{{"message":"","userInfo":{}}}"#, profile_json());
        let request: ChatRequestDto = serde_json::from_str(&json).expect("request should parse");

        assert!(request.validate().is_err());
    }

    #[test]
    fn quiz_request_rejects_oversized_topic() {
        let json = format!(
            r#"{{"topic":"{}","userInfo":{}}}"#,
            "a".repeat(201),
            profile_json()
        );
        let request: QuizRequestDto = serde_json::from_str(&json).expect("request should parse");

        assert!(request.validate().is_err());
    }

    #[test]
    fn quiz_request_requires_user_info() {
        let parsed = serde_json::from_str::<QuizRequestDto>(r#"{"topic":"Algebra"}"#);

        assert!(parsed.is_err());
    }

    #[test]
    fn score_request_rejects_empty_questions() {
        let request: ScoreQuizRequestDto =
            serde_json::from_str(r#"{"questions":[],"selectedAnswers":[]}"#)
                .expect("request should parse");

        assert!(request.validate().is_err());
    }
}
