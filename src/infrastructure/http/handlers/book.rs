//! Book Handlers - 翻页、重排、定制

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{
    ChangePageCommand, GetBookPage, GetCustomization, ReorderChaptersCommand,
    UpdateCustomizationCommand,
};
use crate::domain::book::{BookSize, ColorScheme, FontStyle, Navigation};
use crate::domain::story::StoryId;
use crate::infrastructure::http::dto::{ApiResponse, BookPageResponse, CustomizationResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Page
// ============================================================================

pub async fn get_book_page(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<BookPageResponse>>, ApiError> {
    let view = state.get_book_page_handler.handle(GetBookPage).await?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// 翻页请求：`{"action": "next"}` / `{"action": "previous"}` / `{"action": "jump", "index": 3}`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigateRequest {
    Next,
    Previous,
    Jump { index: i64 },
}

impl From<NavigateRequest> for Navigation {
    fn from(req: NavigateRequest) -> Self {
        match req {
            NavigateRequest::Next => Navigation::Next,
            NavigateRequest::Previous => Navigation::Previous,
            NavigateRequest::Jump { index } => Navigation::JumpTo(index),
        }
    }
}

pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<ApiResponse<BookPageResponse>>, ApiError> {
    let cmd = ChangePageCommand {
        navigation: req.into(),
    };

    let result = state.change_page_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(result.page.into())))
}

// ============================================================================
// Reorder
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub active_id: String,
    pub over_id: String,
}

#[derive(Debug, Serialize)]
pub struct ReorderResponseDto {
    pub moved: bool,
    pub order: Vec<String>,
    pub current_page: usize,
}

pub async fn reorder_chapters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<ReorderResponseDto>>, ApiError> {
    let cmd = ReorderChaptersCommand {
        active_id: StoryId::from(req.active_id),
        over_id: StoryId::from(req.over_id),
    };

    let result = state.reorder_chapters_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(ReorderResponseDto {
        moved: result.moved,
        order: result.order.iter().map(|id| id.as_str().to_string()).collect(),
        current_page: result.current_page,
    })))
}

// ============================================================================
// Customization
// ============================================================================

pub async fn get_customization(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CustomizationResponse>>, ApiError> {
    let custom = state.get_customization_handler.handle(GetCustomization).await?;
    Ok(Json(ApiResponse::success(custom.into())))
}

#[derive(Debug, Deserialize)]
pub struct CustomizationRequest {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

fn parse_selection<T>(
    value: Option<&str>,
    kind: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ApiError> {
    value
        .map(|v| parse(v).ok_or_else(|| ApiError::BadRequest(format!("Invalid {}: {}", kind, v))))
        .transpose()
}

pub async fn update_customization(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomizationRequest>,
) -> Result<Json<ApiResponse<CustomizationResponse>>, ApiError> {
    let cmd = UpdateCustomizationCommand {
        size: parse_selection(req.size.as_deref(), "book size", BookSize::from_str)?,
        font: parse_selection(req.font.as_deref(), "font style", FontStyle::from_str)?,
        color: parse_selection(req.color.as_deref(), "color scheme", ColorScheme::from_str)?,
    };

    let result = state.update_customization_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(result.customization.into())))
}
