//! Story Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PromptId, StoryError, StoryId, StoryStatus};

/// Story 聚合根 - 书中的一章
///
/// 不变量:
/// - id 在故事集合内唯一
/// - 同一个 Prompt 最多对应一个 Story
/// - 集合中的顺序即章节顺序，只能通过重排引擎修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    pub prompt_id: PromptId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub status: StoryStatus,
}

impl Story {
    /// 创建新故事（首次保存）
    pub fn new(prompt_id: PromptId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: StoryId::new(),
            prompt_id,
            title: title.into(),
            content: content.into(),
            image_url: None,
            date_created: Utc::now(),
            status: StoryStatus::Completed,
        }
    }

    pub fn with_image(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url.filter(|url| !url.is_empty());
        self
    }

    pub fn with_status(mut self, status: StoryStatus) -> Self {
        self.status = status;
        self
    }

    /// 校验标题（只要求非空，不限长度）
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.title.trim().is_empty() {
            return Err(StoryError::InvalidTitle("标题不能为空".to_string()));
        }
        Ok(())
    }

    /// 正文字符数（按 Unicode 字符计）
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
