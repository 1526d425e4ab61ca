//! Demo SMS and chatbot endpoints.

use crate::assistant::{chatbot_reply, record_sms};
use crate::error::AppError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SmsRequest {
    phone: Option<String>,
    message: Option<String>,
}

pub(crate) async fn chatbot(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let reply = chatbot_reply(request.message.as_deref().unwrap_or_default());
    Ok(Json(json!({ "reply": reply })))
}

pub(crate) async fn send_sms(
    payload: Result<Json<SmsRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    record_sms(request.phone.as_deref(), request.message.as_deref());
    Ok(Json(json!({ "status": "SMS sent", "phone": request.phone })))
}
