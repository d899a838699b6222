//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod book_queries;
mod session_queries;
mod story_queries;

pub mod handlers;

pub use book_queries::*;
pub use session_queries::*;
pub use story_queries::*;
