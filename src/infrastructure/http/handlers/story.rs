//! Story Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GetStory, ListStories, SaveStoryCommand};
use crate::domain::story::{PromptId, StoryId, StoryStatus};
use crate::infrastructure::http::dto::{ApiResponse, PromptResponse, StoryResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StoryListResponse {
    pub total: usize,
    pub stories: Vec<StoryResponse>,
}

pub async fn list_stories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StoryListResponse>>, ApiError> {
    let stories = state.list_stories_handler.handle(ListStories).await?;
    Ok(Json(ApiResponse::success(StoryListResponse {
        total: stories.len(),
        stories: stories.into_iter().map(Into::into).collect(),
    })))
}

// ============================================================================
// Get
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetStoryRequest {
    pub prompt_id: String,
}

#[derive(Debug, Serialize)]
pub struct StoryDraftDto {
    pub prompt: PromptResponse,
    pub story: Option<StoryResponse>,
}

pub async fn get_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetStoryRequest>,
) -> Result<Json<ApiResponse<StoryDraftDto>>, ApiError> {
    let query = GetStory {
        prompt_id: PromptId::from(req.prompt_id),
    };

    let result = state.get_story_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(StoryDraftDto {
        prompt: result.prompt.into(),
        story: result.story.map(Into::into),
    })))
}

// ============================================================================
// Save
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveStoryRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub prompt_id: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveStoryResponseDto {
    pub story: StoryResponse,
    pub created: bool,
    pub total_stories: usize,
}

pub async fn save_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveStoryRequest>,
) -> Result<Json<ApiResponse<SaveStoryResponseDto>>, ApiError> {
    let status = match req.status.as_deref() {
        None => None,
        Some(s) => Some(
            StoryStatus::from_str(s)
                .ok_or_else(|| ApiError::BadRequest(format!("Invalid status: {}", s)))?,
        ),
    };

    let cmd = SaveStoryCommand {
        id: req.id.filter(|id| !id.is_empty()).map(StoryId::from),
        prompt_id: PromptId::from(req.prompt_id),
        title: req.title,
        content: req.content,
        image_url: req.image_url,
        status,
    };

    let result = state.save_story_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(SaveStoryResponseDto {
        story: result.story.into(),
        created: result.created,
        total_stories: result.stories_count,
    })))
}
