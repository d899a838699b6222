//! Story Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 故事唯一标识
///
/// 持久化数据中的 id 为任意字符串（种子数据使用 `s1`、`s2` ...），
/// 新建的故事使用 uuid。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 写作提示唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for PromptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PromptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 故事状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    Draft,
    #[default]
    Completed,
}

impl StoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Draft => "draft",
            StoryStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(StoryStatus::Draft),
            "completed" => Some(StoryStatus::Completed),
            _ => None,
        }
    }
}

/// 写作提示分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptCategory {
    Childhood,
    Family,
    Career,
    Adventures,
    Wisdom,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 5] = [
        PromptCategory::Childhood,
        PromptCategory::Family,
        PromptCategory::Career,
        PromptCategory::Adventures,
        PromptCategory::Wisdom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Childhood => "Childhood",
            PromptCategory::Family => "Family",
            PromptCategory::Career => "Career",
            PromptCategory::Adventures => "Adventures",
            PromptCategory::Wisdom => "Wisdom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
