use serde::Serialize;
use serde_json::Value;

pub const ANSWER_COUNT: usize = 4;

/// A single-choice question with exactly four answers.
///
/// `correct_answer` is a zero-based index into `answers`. Instances built
/// from untrusted JSON go through [`QuizQuestion::from_json`], which checks
/// every field before the question is handed to scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub answers: [String; ANSWER_COUNT],
    pub correct_answer: u8,
    pub explanation: String,
}

impl QuizQuestion {
    /// Validates one element of a model-produced question array.
    ///
    /// Unknown keys are ignored. The error is a short reason suitable for logs.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "question entry must be an object".to_string())?;

        let question = match object.get("question") {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            Some(Value::String(_)) => return Err("question must not be empty".to_string()),
            _ => return Err("question must be a string".to_string()),
        };

        let answers = match object.get("answers") {
            Some(Value::Array(items)) => items,
            _ => return Err("answers must be an array".to_string()),
        };
        if answers.len() != ANSWER_COUNT {
            return Err(format!(
                "answers must contain exactly {} entries, got {}",
                ANSWER_COUNT,
                answers.len()
            ));
        }
        let mut texts = Vec::with_capacity(ANSWER_COUNT);
        for (position, answer) in answers.iter().enumerate() {
            match answer {
                Value::String(text) => texts.push(text.clone()),
                _ => return Err(format!("answer {} must be a string", position)),
            }
        }
        let answers: [String; ANSWER_COUNT] = texts
            .try_into()
            .map_err(|_| "answers must contain exactly 4 entries".to_string())?;

        let correct_answer = match object.get("correctAnswer") {
            Some(Value::Number(number)) => number
                .as_u64()
                .filter(|index| *index < ANSWER_COUNT as u64)
                .ok_or_else(|| format!("correctAnswer {} is outside 0..=3", number))?,
            _ => return Err("correctAnswer must be an integer".to_string()),
        };

        let explanation = match object.get("explanation") {
            Some(Value::String(text)) => text.clone(),
            _ => return Err("explanation must be a string".to_string()),
        };

        Ok(QuizQuestion {
            question,
            answers,
            correct_answer: correct_answer as u8,
            explanation,
        })
    }

    pub fn correct_answer_text(&self) -> &str {
        &self.answers[self.correct_answer as usize]
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer as usize
    }
}
