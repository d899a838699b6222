//! HTTP Handlers
//!
//! 每个 handler 只做请求 DTO 与命令/查询之间的转换

mod book;
mod editor;
mod ping;
mod prompt;
mod session;
mod story;

pub use book::*;
pub use editor::*;
pub use ping::*;
pub use prompt::*;
pub use session::*;
pub use story::*;
