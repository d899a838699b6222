//! Prompt Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GeneratePromptCommand, ListPrompts};
use crate::domain::story::PromptCategory;
use crate::infrastructure::http::dto::{ApiResponse, PromptResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListPromptsParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    pub total: usize,
    pub answered: usize,
    pub prompts: Vec<PromptResponse>,
}

pub async fn list_prompts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListPromptsParams>,
) -> Result<Json<ApiResponse<PromptListResponse>>, ApiError> {
    let category = match params.category.as_deref() {
        None | Some("") | Some("All") => None,
        Some(c) => Some(
            PromptCategory::from_str(c)
                .ok_or_else(|| ApiError::BadRequest(format!("Invalid category: {}", c)))?,
        ),
    };

    let prompts = state
        .list_prompts_handler
        .handle(ListPrompts { category })
        .await?;

    Ok(Json(ApiResponse::success(PromptListResponse {
        total: prompts.len(),
        answered: prompts.iter().filter(|p| p.is_answered).count(),
        prompts: prompts.into_iter().map(Into::into).collect(),
    })))
}

/// AI 不可用时 data 为 null
pub async fn generate_prompt(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Option<PromptResponse>>>, ApiError> {
    let result = state
        .generate_prompt_handler
        .handle(GeneratePromptCommand)
        .await?;
    Ok(Json(ApiResponse::success(result.prompt.map(Into::into))))
}
