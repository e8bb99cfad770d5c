use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{filename::build_summary_price_name, state::AppState};

/// What the pages need to know about the chat-completion endpoint. The key
/// itself never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub model: String,
    pub chat_url: String,
    pub has_key: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileNameQuery {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNameResponse {
    pub file_name: String,
}

pub async fn handle_config(State(state): State<AppState>) -> Json<ConfigSummary> {
    let config = &state.openai;
    Json(ConfigSummary {
        model: config.model.clone(),
        chat_url: config.normalized_chat_url(),
        has_key: config.has_key(),
    })
}

pub async fn handle_file_name(Query(query): Query<FileNameQuery>) -> Json<FileNameResponse> {
    let file_name = build_summary_price_name(query.summary.as_deref(), query.price.as_deref());
    debug!("Built file name: {file_name}");
    Json(FileNameResponse { file_name })
}
