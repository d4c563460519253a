use axum::Json;

use crate::{
    extract::LenientJson,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
};

pub async fn chat_handler(LenientJson(payload): LenientJson<ChatRequest>) -> Json<ChatResponse> {
    let reply = generate_reply(&payload.message);
    Json(ChatResponse {
        reply: reply.to_string(),
    })
}
