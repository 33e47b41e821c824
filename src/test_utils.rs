#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::UserProfile;

    /// Profile used throughout the quiz and chat tests
    pub fn test_profile() -> UserProfile {
        UserProfile::new("11-14", "Middle School", "6-8")
    }

    pub fn photosynthesis_question_json() -> &'static str {
        r#"{"question":"What pigment absorbs light?","answers":["Chlorophyll","Melanin","Keratin","Collagen"],"correctAnswer":0,"explanation":"Chlorophyll absorbs light for photosynthesis."}"#
    }

    /// A well-formed question array of `count` entries; question `i` has
    /// correct answer `i % 4`.
    pub fn quiz_json(count: usize) -> String {
        let questions: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Question {}", i + 1),
                    "answers": ["Option A", "Option B", "Option C", "Option D"],
                    "correctAnswer": i % 4,
                    "explanation": format!("Explanation {}", i + 1),
                })
            })
            .collect();
        serde_json::Value::Array(questions).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_json_has_requested_length() {
        let value: serde_json::Value =
            serde_json::from_str(&quiz_json(10)).expect("fixture is valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(10));
        assert_eq!(value[5]["correctAnswer"], 1);
    }

    #[test]
    fn test_fixtures_test_profile() {
        let profile = test_profile();
        assert_eq!(profile.age_range, "11-14");
        assert_eq!(profile.education_level, "Middle School");
    }
}
