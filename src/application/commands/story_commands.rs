//! Story Commands - 故事写操作

use crate::domain::story::{Prompt, PromptId, Story, StoryId, StoryStatus};

/// 保存故事命令 - 首次保存创建，之后按 id 原位替换
#[derive(Debug, Clone)]
pub struct SaveStoryCommand {
    /// 已有故事的 id，None 表示新建（或替换该提示已有的故事）
    pub id: Option<StoryId>,
    pub prompt_id: PromptId,
    /// 为空时使用提示的问题作为标题
    pub title: String,
    pub content: String,
    /// 空字符串视为没有插图
    pub image_url: Option<String>,
    pub status: Option<StoryStatus>,
}

/// 保存故事响应
#[derive(Debug, Clone)]
pub struct SaveStoryResponse {
    pub story: Story,
    pub prompt: Prompt,
    /// 是否新增了章节
    pub created: bool,
    pub stories_count: usize,
}
