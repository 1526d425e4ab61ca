//! Medicine search and interaction check.

use crate::error::AppError;
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use log::debug;
use pillminder_store::UNKNOWN_MEDICINE;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct MedicineSearchRequest {
    medicine: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupQuery {
    q: Option<String>,
}

/// Exact-name search; unknown or missing names get the stock reply.
pub(crate) async fn medicine_search(
    State(state): State<AppState>,
    payload: Result<Json<MedicineSearchRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let medicine = request.medicine.unwrap_or_default();
    let info = state.catalog().describe(&medicine);
    debug!(
        "medicine search (query_len={}, known={})",
        medicine.len(),
        info != UNKNOWN_MEDICINE
    );
    Ok(Json(json!({ "info": info })))
}

/// Exact match first, then the first partial match.
pub(crate) async fn medicine_lookup(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query?;
    let q = query
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("missing query parameter: q".to_string()))?;
    let answer = state
        .catalog()
        .lookup(&q)
        .map(|entry| entry.description.as_str())
        .unwrap_or(UNKNOWN_MEDICINE);
    Ok(Json(json!({ "answer": answer })))
}
