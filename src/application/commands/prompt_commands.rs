//! Prompt Commands - 写作提示相关命令

use crate::domain::story::Prompt;

/// 请求 AI 生成一个新的写作提示
#[derive(Debug, Clone, Default)]
pub struct GeneratePromptCommand;

/// 生成结果，协作者失败时为 None
#[derive(Debug, Clone)]
pub struct GeneratePromptResponse {
    pub prompt: Option<Prompt>,
}
