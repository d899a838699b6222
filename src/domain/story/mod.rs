//! Story Context - 故事限界上下文
//!
//! 职责:
//! - Story 聚合（书中的章节）
//! - Prompt 实体（写作提示）
//! - 种子数据

mod aggregate;
mod defaults;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Story;
pub use defaults::{default_prompts, default_stories};
pub use entities::Prompt;
pub use errors::StoryError;
pub use value_objects::{PromptCategory, PromptId, StoryId, StoryStatus};
