//! Session Handlers - 模拟登录

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{GetCurrentUser, LoginCommand, LogoutCommand, SignupCommand};
use crate::infrastructure::http::dto::{ApiResponse, Empty, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let cmd = LoginCommand {
        name: req.name,
        email: req.email,
    };

    let result = state.login_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(result.user.into())))
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let cmd = SignupCommand {
        name: req.name,
        email: req.email,
    };

    let result = state.signup_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::success(result.user.into())))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.logout_handler.handle(LogoutCommand).await?;
    Ok(Json(ApiResponse::ok()))
}

/// 未登录时 data 为 null
pub async fn current_user(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Option<UserResponse>>>, ApiError> {
    let user = state.get_current_user_handler.handle(GetCurrentUser).await?;
    Ok(Json(ApiResponse::success(user.map(Into::into))))
}
