use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub index: usize,
    pub selected: usize,
    pub correct: usize,
    pub is_correct: bool,
    pub explanation: String,
}

impl QuizResult {
    pub fn all_correct(&self) -> bool {
        self.score == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_result_serializes_camel_case() {
        let result = QuizResult {
            score: 1,
            total: 1,
            results: vec![QuestionResult {
                index: 0,
                selected: 2,
                correct: 2,
                is_correct: true,
                explanation: "Right".to_string(),
            }],
        };

        let json = serde_json::to_value(&result).expect("result should serialize");
        assert_eq!(json["results"][0]["isCorrect"], true);
        assert!(result.all_correct());
    }
}
