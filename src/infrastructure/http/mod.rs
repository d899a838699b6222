//! HTTP Layer - 本地 JSON API
//!
//! 展示层只通过这里读取页面视图、发出翻页和重排请求

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
