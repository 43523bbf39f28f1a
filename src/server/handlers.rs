use axum::Json;
use axum::extract::State;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::models::Combo;
use crate::selector::{RemarkStyle, SelectorStats};
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// One combo as returned by `GET /api/menu`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboResponse {
    /// 1-based position within the batch.
    pub combo_id: usize,
    pub main: String,
    pub side: String,
    pub drink: String,
    pub total_calories: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl ComboResponse {
    pub fn new(combo_id: usize, combo: &Combo, style: RemarkStyle) -> Self {
        let (remark, reasoning) = match style {
            RemarkStyle::Sentence => (Some(combo.remark.clone()), None),
            RemarkStyle::TagList => (None, Some(combo.remark.clone())),
        };
        Self {
            combo_id,
            main: combo.main.name.clone(),
            side: combo.side.name.clone(),
            drink: combo.drink.name.clone(),
            total_calories: combo.total_calories().round() as i64,
            remark,
            reasoning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub status: String,
    pub date: String,
    pub combos: Vec<ComboResponse>,
}

/// `GET /api/menu`: the next batch of combos.
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<MenuResponse>, ApiError> {
    let mut selector = state.lock()?;
    let combos = selector
        .generate_combos()
        .map_err(|e| state.api_error(e))?;

    if combos.is_empty() {
        return Err(ApiError::NothingNew {
            policy: selector.policy(),
            available: selector.catalog().available_items(),
        });
    }

    let style = selector.remark_style();
    let combos: Vec<ComboResponse> = combos
        .iter()
        .enumerate()
        .map(|(i, combo)| ComboResponse::new(i + 1, combo, style))
        .collect();

    Ok(Json(MenuResponse {
        status: "success".to_string(),
        date: Local::now().format("%Y-%m-%d").to_string(),
        combos,
    }))
}

/// `GET /api/menu/stats`: catalog sizes and usage since the last reset.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<SelectorStats>, ApiError> {
    let selector = state.lock()?;
    Ok(Json(selector.stats()))
}

/// `POST /api/menu/reset`: start a fresh cycle.
pub async fn reset_menu(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let mut selector = state.lock()?;
    selector.reset();
    info!("menu usage reset via API");
    Ok(Json(json!({
        "status": "success",
        "message": "Menu usage has been reset.",
    })))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
