use serde::Serialize;
use serde_json::Value;

use crate::{errors::QuizGenerationError, models::domain::quiz_question::QuizQuestion};

/// A validated, non-empty list of questions. Serializes as a plain JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Validates a parsed payload as a whole. The first failing element
    /// rejects the batch; no partial quiz is produced.
    pub fn from_json(value: &Value) -> Result<Self, QuizGenerationError> {
        let items = value
            .as_array()
            .ok_or_else(|| QuizGenerationError::Validation {
                index: 0,
                reason: "payload must be a JSON array".to_string(),
            })?;

        if items.is_empty() {
            return Err(QuizGenerationError::Validation {
                index: 0,
                reason: "quiz must contain at least one question".to_string(),
            });
        }

        let questions = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                QuizQuestion::from_json(item)
                    .map_err(|reason| QuizGenerationError::Validation { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Quiz { questions })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
