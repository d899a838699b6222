//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事与写作提示
//! - Book Context: 分页、跨页排版、章节重排、定制选项

pub mod book;
pub mod story;
