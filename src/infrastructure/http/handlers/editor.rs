//! Editor Handlers - AI 辅助

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{IllustrateStoryCommand, RefineTextCommand};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RefineResponseDto {
    pub text: String,
    pub changed: bool,
}

pub async fn refine_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefineRequest>,
) -> Result<Json<ApiResponse<RefineResponseDto>>, ApiError> {
    let result = state
        .refine_text_handler
        .handle(RefineTextCommand { text: req.text })
        .await?;

    Ok(Json(ApiResponse::success(RefineResponseDto {
        text: result.text,
        changed: result.changed,
    })))
}

#[derive(Debug, Deserialize)]
pub struct IllustrateRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct IllustrateResponseDto {
    pub image_url: Option<String>,
}

pub async fn illustrate_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IllustrateRequest>,
) -> Result<Json<ApiResponse<IllustrateResponseDto>>, ApiError> {
    let result = state
        .illustrate_story_handler
        .handle(IllustrateStoryCommand { content: req.content })
        .await?;

    Ok(Json(ApiResponse::success(IllustrateResponseDto {
        image_url: result.image_url,
    })))
}
