use crate::{
    errors::{AppError, AppResult},
    models::domain::{quiz_question::ANSWER_COUNT, QuestionResult, Quiz, QuizResult},
};

pub struct QuizGrader;

impl QuizGrader {
    /// Scores one pass through `quiz`. `selected[i]` is the answer index
    /// chosen for question `i`; each correct pick earns one point.
    pub fn grade(quiz: &Quiz, selected: &[usize]) -> AppResult<QuizResult> {
        if selected.len() != quiz.len() {
            return Err(AppError::ValidationError(format!(
                "Expected {} selected answers, got {}",
                quiz.len(),
                selected.len()
            )));
        }

        let results = quiz
            .questions()
            .iter()
            .zip(selected)
            .enumerate()
            .map(|(index, (question, &choice))| {
                if choice >= ANSWER_COUNT {
                    return Err(AppError::ValidationError(format!(
                        "Selected answer {} for question {} is outside 0..=3",
                        choice, index
                    )));
                }

                Ok(QuestionResult {
                    index,
                    selected: choice,
                    correct: question.correct_answer as usize,
                    is_correct: question.is_correct(choice),
                    explanation: question.explanation.clone(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let score = results.iter().filter(|r| r.is_correct).count();

        Ok(QuizResult {
            score,
            total: quiz.len(),
            results,
        })
    }
}
