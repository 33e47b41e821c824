use actix_web::{post, web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Quiz,
        dto::{
            request::{QuizRequestDto, ScoreQuizRequestDto},
            response::QuizResponseDto,
        },
    },
    services::quiz_grader::QuizGrader,
};

#[post("/api/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let questions = state
        .quiz_service
        .generate_quiz(&request.topic, &request.user_info)
        .await?;

    Ok(HttpResponse::Ok().json(QuizResponseDto { questions }))
}

#[post("/api/quiz/score")]
pub async fn score_quiz(request: web::Json<ScoreQuizRequestDto>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = Quiz::from_json(&Value::Array(request.questions))
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let result = QuizGrader::grade(&quiz, &request.selected_answers)?;

    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        errors::{CompletionError, QUIZ_FAILED_MESSAGE, QUIZ_INVALID_DATA_MESSAGE},
        handlers::configure,
        services::completion_client::MockCompletionClient,
        test_utils::fixtures::{photosynthesis_question_json, quiz_json},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn quiz_body() -> Value {
        json!({
            "topic": "Photosynthesis",
            "userInfo": { "ageRange": "11-14", "educationLevel": "Middle School", "grade": "6-8" }
        })
    }

    fn mock_returning(result: Result<String, CompletionError>) -> MockCompletionClient {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(move |_| result.clone());
        mock
    }

    async fn post_quiz(mock: MockCompletionClient) -> (StatusCode, Value) {
        let state = AppState::with_client(Config::test_config(), Arc::new(mock));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(quiz_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_generate_quiz_returns_questions() {
        let completion = format!("[{}]", photosynthesis_question_json());
        let (status, body) = post_quiz(mock_returning(Ok(completion))).await;

        assert_eq!(status, StatusCode::OK);
        let expected: Value =
            serde_json::from_str(photosynthesis_question_json()).expect("fixture is json");
        assert_eq!(body["questions"], json!([expected]));
    }

    #[actix_web::test]
    async fn test_generate_quiz_invalid_payload_is_generic_500() {
        let (status, body) =
            post_quiz(mock_returning(Ok("No quiz today, sorry.".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], QUIZ_INVALID_DATA_MESSAGE);
    }

    #[actix_web::test]
    async fn test_generate_quiz_provider_error_hides_detail() {
        let (status, body) = post_quiz(mock_returning(Err(CompletionError::Request(
            "401 Unauthorized: API key expired".to_string(),
        ))))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], QUIZ_FAILED_MESSAGE);
        assert!(!body.to_string().contains("API key"));
    }

    #[actix_web::test]
    async fn test_score_quiz() {
        let app = test::init_service(App::new().configure(configure)).await;
        let questions: Value = serde_json::from_str(&quiz_json(3)).expect("fixture is json");

        let req = test::TestRequest::post()
            .uri("/api/quiz/score")
            .set_json(json!({ "questions": questions, "selectedAnswers": [0, 3, 2] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["score"], 2);
        assert_eq!(body["total"], 3);
        assert_eq!(body["results"][1]["isCorrect"], false);
        assert_eq!(body["results"][1]["correct"], 1);
    }

    #[actix_web::test]
    async fn test_score_quiz_rejects_malformed_questions() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/score")
            .set_json(json!({
                "questions": [{ "question": "Q", "answers": ["a"], "correctAnswer": 0, "explanation": "" }],
                "selectedAnswers": [0]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
