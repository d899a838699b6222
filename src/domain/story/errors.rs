//! Story Context - Errors

use thiserror::Error;

use super::PromptId;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("写作提示不存在: {0}")]
    PromptNotFound(PromptId),

    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("无效的问题: {0}")]
    InvalidQuestion(String),
}
