use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ChatTurn,
        dto::{request::ChatRequestDto, response::ChatResponseDto},
    },
};

/// Chat turns always answer 200; pipeline failures surface as canned replies.
#[post("/api/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state
        .chat_service
        .handle_message(&request.message, &request.user_info)
        .await;

    Ok(HttpResponse::Ok().json(ChatResponseDto {
        message: reply.render_html(),
    }))
}

#[get("/api/chat/greeting")]
pub async fn chat_greeting() -> HttpResponse {
    HttpResponse::Ok().json(ChatTurn::greeting())
}
