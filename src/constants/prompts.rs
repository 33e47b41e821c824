use crate::models::domain::UserProfile;

pub const STUDY_SUBJECTS: &str =
    "Mathematics, Science, History, Geography, Programming, Engineering, Literature, and Academic Writing";

pub const QUIZ_QUESTION_COUNT: usize = 10;

pub const OUT_OF_SCOPE_MESSAGE: &str = "I can only help with study-related queries.";
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "I'm sorry, but I couldn't generate a response. Please try again.";
pub const RESPONSE_ERROR_MESSAGE: &str =
    "I apologize, but I encountered an error while processing your request. Please try again later.";

pub fn topic_filter_prompt(message: &str) -> String {
    format!(
        "You are an AI filter that decides if a query is study-related.
Study-related topics include subjects like: {subjects}.
If the query is study-related, respond with exactly \"yes\" (lowercase, no punctuation). Otherwise, respond with exactly \"no\" (lowercase, no punctuation).

Query: \"{message}\"",
        subjects = STUDY_SUBJECTS,
        message = message,
    )
}

pub fn tutoring_prompt(message: &str, profile: &UserProfile) -> String {
    format!(
        "You are a student support chatbot. You only answer **study-related** questions.
The user is in the {age} age range, at the {level} education level, and in grade {grade}.
Please provide an appropriate response to their message: \"{message}\"

Format your response using the following rules:
1. Use HTML tags to structure the content.
2. Keep information short and to the point.
3. Organize key points in a <div> with class \"bg-gray-100 p-3 rounded-lg my-2\".
4. Highlight important information using <strong> tags.
5. Use <h3> tags for subtitles if needed.
6. Keep the overall response brief and easy to read.",
        age = profile.age_range,
        level = profile.education_level,
        grade = profile.grade,
        message = message,
    )
}

pub fn quiz_prompt(topic: &str, profile: &UserProfile) -> String {
    format!(
        "Generate a quiz on the topic \"{topic}\" for a student in the {age} age range,
at the {level} education level, and in grade {grade}.
Create {count} single choice questions. For each question, provide 4 answer choices, the index of the correct answer, and a brief explanation.
Format the response as a JSON array of objects, where each object represents a question and has the following structure:
{{
  \"question\": \"The question text\",
  \"answers\": [\"Answer A\", \"Answer B\", \"Answer C\", \"Answer D\"],
  \"correctAnswer\": 0,
  \"explanation\": \"Brief explanation of the correct answer\"
}}
\"correctAnswer\" is the zero-based index (0-3) of the correct entry in \"answers\".
Ensure the questions are appropriate for the user's education level and age range.
Respond with the JSON array only. Do not include any prose, markdown code fences, or other formatting outside of the JSON array.",
        topic = topic,
        age = profile.age_range,
        level = profile.education_level,
        grade = profile.grade,
        count = QUIZ_QUESTION_COUNT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("11-14", "Middle School", "6-8")
    }

    #[test]
    fn topic_filter_prompt_embeds_message_and_answer_contract() {
        let prompt = topic_filter_prompt("How do volcanoes form?");

        assert!(prompt.contains("Query: \"How do volcanoes form?\""));
        assert!(prompt.contains("exactly \"yes\""));
        assert!(prompt.contains("exactly \"no\""));
        assert!(prompt.contains("Academic Writing"));
    }

    #[test]
    fn tutoring_prompt_embeds_profile_and_formatting_rules() {
        let prompt = tutoring_prompt("What is a noun?", &profile());

        assert!(prompt.contains("11-14 age range"));
        assert!(prompt.contains("Middle School education level"));
        assert!(prompt.contains("grade 6-8"));
        assert!(prompt.contains("\"What is a noun?\""));
        assert!(prompt.contains("<h3>"));
        assert!(prompt.contains("bg-gray-100 p-3 rounded-lg my-2"));
    }

    #[test]
    fn quiz_prompt_requests_json_only() {
        let prompt = quiz_prompt("Photosynthesis", &profile());

        assert!(prompt.contains("topic \"Photosynthesis\""));
        assert!(prompt.contains("Create 10 single choice questions"));
        assert!(prompt.contains("\"correctAnswer\": 0"));
        assert!(prompt.contains("JSON array only"));
    }
}
