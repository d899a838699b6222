//! Story Queries - 故事与写作提示

use crate::domain::story::{PromptCategory, PromptId};

/// 列出全部故事（章节顺序）
#[derive(Debug, Clone, Default)]
pub struct ListStories;

/// 获取回答某个提示的故事（编辑器使用）
#[derive(Debug, Clone)]
pub struct GetStory {
    pub prompt_id: PromptId,
}

/// 列出写作提示
#[derive(Debug, Clone, Default)]
pub struct ListPrompts {
    /// None 表示全部分类
    pub category: Option<PromptCategory>,
}
