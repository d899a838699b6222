//! Story Context - Entities

use serde::{Deserialize, Serialize};

use super::{PromptCategory, PromptId, StoryError};

/// 写作提示
///
/// 不变量:
/// - is_answered 为派生状态：保存引用此 Prompt 的 Story 时置为 true，之后不会再置回 false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub question: String,
    pub category: PromptCategory,
    #[serde(default)]
    pub is_answered: bool,
}

impl Prompt {
    pub fn new(question: impl Into<String>, category: PromptCategory) -> Self {
        Self {
            id: PromptId::new(),
            question: question.into(),
            category,
            is_answered: false,
        }
    }

    /// 由外部生成的问题创建 Prompt，问题为空时拒绝
    pub fn try_new(question: impl Into<String>, category: PromptCategory) -> Result<Self, StoryError> {
        let question = question.into().trim().to_string();
        if question.is_empty() {
            return Err(StoryError::InvalidQuestion("问题不能为空".to_string()));
        }
        Ok(Self::new(question, category))
    }

    pub fn mark_answered(&mut self) {
        self.is_answered = true;
    }
}
