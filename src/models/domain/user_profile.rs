use serde::{Deserialize, Serialize};
use validator::Validate;

/// Learner attributes collected during onboarding. Values are interpolated
/// into prompts as-is and are not checked against the onboarding choices.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(max = 100))]
    pub age_range: String,
    #[validate(length(max = 100))]
    pub education_level: String,
    #[validate(length(max = 100))]
    pub grade: String,
}

impl UserProfile {
    pub fn new(age_range: &str, education_level: &str, grade: &str) -> Self {
        UserProfile {
            age_range: age_range.to_string(),
            education_level: education_level.to_string(),
            grade: grade.to_string(),
        }
    }
}
