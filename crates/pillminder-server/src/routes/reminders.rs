//! Reminder CRUD handlers.

use crate::error::AppError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use log::{info, warn};
use pillminder_store::{NewReminder, Reminder};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct AddReminderRequest {
    name: Option<String>,
    medication: Option<String>,
    time: Option<String>,
}

/// `is_taken` arrives as a JSON bool from some clients and as 0/1 from others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TakenFlag {
    Bool(bool),
    Int(i64),
}

impl TakenFlag {
    fn into_bool(self) -> Result<bool, AppError> {
        match self {
            TakenFlag::Bool(value) => Ok(value),
            TakenFlag::Int(0) => Ok(false),
            TakenFlag::Int(1) => Ok(true),
            TakenFlag::Int(other) => Err(AppError::Validation(format!(
                "is_taken must be true, false, 0 or 1 (got {other})"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    id: Option<i64>,
    is_taken: Option<TakenFlag>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("missing field: {field}")))
}

pub(crate) async fn add_reminder(
    State(state): State<AppState>,
    payload: Result<Json<AddReminderRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let reminder = NewReminder::new(
        required(request.name, "name")?,
        required(request.medication, "medication")?,
        required(request.time, "time")?,
    );
    let id = state.with_store(move |store| store.create(&reminder)).await?;
    info!("reminder created (id={id})");
    Ok(Json(json!({
        "status": "success",
        "message": "Reminder added!",
        "id": id,
    })))
}

/// Lenient read: a store failure yields an empty list.
pub(crate) async fn get_reminders(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    match state.with_store(|store| store.list()).await {
        Ok(reminders) => Json(reminders),
        Err(err) => {
            warn!("listing reminders failed, returning empty list (error={err})");
            Json(Vec::new())
        }
    }
}

pub(crate) async fn update_status(
    State(state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let id = required(request.id, "id")?;
    let is_taken = required(request.is_taken, "is_taken")?.into_bool()?;
    state
        .with_store(move |store| store.set_taken(id, is_taken))
        .await?;
    info!("reminder status updated (id={id}, is_taken={is_taken})");
    Ok(Json(json!({ "status": "success" })))
}
