//! Fake Assistant Client - 离线 AI 协作者
//!
//! 不调用任何外部服务，结果确定：
//! - 润色：合并空白、首字母大写、补全句末标点
//! - 提示：从内置问题中选第一个未使用的
//! - 插图：固定的 1x1 PNG

use async_trait::async_trait;

use crate::application::ports::{
    AssistantError, GeneratedPrompt, IllustratorPort, PromptGeneratorPort, TextRefinerPort,
};
use crate::domain::story::PromptCategory;

/// 1x1 透明 PNG
const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

const BUILTIN_PROMPTS: &[(&str, PromptCategory)] = &[
    ("What smell instantly takes you back to your grandparents' home?", PromptCategory::Childhood),
    ("What family tradition do you hope will never be lost?", PromptCategory::Family),
    ("Who was the mentor that shaped your working life, and how?", PromptCategory::Career),
    ("What journey changed the way you saw the world?", PromptCategory::Adventures),
    ("What do you know now that you wish you had known at twenty?", PromptCategory::Wisdom),
];

/// Fake Assistant Client
#[derive(Debug, Clone, Default)]
pub struct FakeAssistantClient;

impl FakeAssistantClient {
    pub fn new() -> Self {
        tracing::info!("FakeAssistantClient initialized");
        Self
    }
}

#[async_trait]
impl TextRefinerPort for FakeAssistantClient {
    async fn refine(&self, text: &str) -> Result<String, AssistantError> {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut chars = collapsed.chars();
        let Some(first) = chars.next() else {
            return Err(AssistantError::EmptyResponse);
        };

        let mut refined: String = first.to_uppercase().chain(chars).collect();
        if !refined.ends_with(&['.', '!', '?', '"'][..]) {
            refined.push('.');
        }

        tracing::debug!(chars = refined.chars().count(), "FakeAssistantClient: refined text");
        Ok(refined)
    }
}

#[async_trait]
impl PromptGeneratorPort for FakeAssistantClient {
    async fn generate_prompt(&self, existing_questions: &[String]) -> Result<GeneratedPrompt, AssistantError> {
        BUILTIN_PROMPTS
            .iter()
            .find(|(question, _)| !existing_questions.iter().any(|q| q == question))
            .map(|(question, category)| GeneratedPrompt {
                question: (*question).to_string(),
                category: *category,
            })
            .ok_or(AssistantError::EmptyResponse)
    }
}

#[async_trait]
impl IllustratorPort for FakeAssistantClient {
    async fn generate_image(&self, snippet: &str) -> Result<String, AssistantError> {
        tracing::debug!(
            snippet_chars = snippet.chars().count(),
            "FakeAssistantClient: returning placeholder image"
        );
        Ok(format!("data:image/png;base64,{}", PLACEHOLDER_PNG_BASE64))
    }
}
