//! Story Assistant Ports - AI 协作者抽象
//!
//! 三个独立的外部能力：润色正文、生成写作提示、生成插图。
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::story::PromptCategory;

/// AI 协作者错误
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// 生成的写作提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    pub question: String,
    pub category: PromptCategory,
}

/// 正文润色
#[async_trait]
pub trait TextRefinerPort: Send + Sync {
    /// 保持作者语气，改善流畅度、清晰度和语法
    async fn refine(&self, text: &str) -> Result<String, AssistantError>;
}

/// 写作提示生成
#[async_trait]
pub trait PromptGeneratorPort: Send + Sync {
    /// 生成一个不与已有问题重复的新提示
    async fn generate_prompt(
        &self,
        existing_questions: &[String],
    ) -> Result<GeneratedPrompt, AssistantError>;
}

/// 插图生成
#[async_trait]
pub trait IllustratorPort: Send + Sync {
    /// 根据故事片段生成插图，返回 `data:image/png;base64,...`
    async fn generate_image(&self, snippet: &str) -> Result<String, AssistantError>;
}
