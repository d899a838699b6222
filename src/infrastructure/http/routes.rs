//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                    GET   健康检查
//! - /api/session/login           POST  登录（模拟）
//! - /api/session/signup          POST  注册（模拟）
//! - /api/session/logout          POST  退出
//! - /api/session/current         GET   当前用户
//! - /api/story/list              GET   全部故事（章节顺序）
//! - /api/story/get               POST  获取回答某提示的故事
//! - /api/story/save              POST  保存故事
//! - /api/prompt/list             GET   写作提示（?category=）
//! - /api/prompt/generate         POST  AI 生成新提示
//! - /api/editor/refine           POST  AI 润色
//! - /api/editor/illustrate       POST  AI 插图
//! - /api/book/page               GET   当前页视图
//! - /api/book/navigate           POST  翻页 / 跳转
//! - /api/book/reorder            POST  章节拖放重排
//! - /api/book/customization      GET   定制选项
//! - /api/book/customization      POST  更新定制选项

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/session", session_routes())
        .nest("/story", story_routes())
        .nest("/prompt", prompt_routes())
        .nest("/editor", editor_routes())
        .nest("/book", book_routes())
}

/// Session 路由
fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/signup", post(handlers::signup))
        .route("/logout", post(handlers::logout))
        .route("/current", get(handlers::current_user))
}

/// Story 路由
fn story_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_stories))
        .route("/get", post(handlers::get_story))
        .route("/save", post(handlers::save_story))
}

/// Prompt 路由
fn prompt_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_prompts))
        .route("/generate", post(handlers::generate_prompt))
}

/// Editor 路由
fn editor_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/refine", post(handlers::refine_text))
        .route("/illustrate", post(handlers::illustrate_story))
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/page", get(handlers::get_book_page))
        .route("/navigate", post(handlers::navigate))
        .route("/reorder", post(handlers::reorder_chapters))
        .route(
            "/customization",
            get(handlers::get_customization).post(handlers::update_customization),
        )
}
