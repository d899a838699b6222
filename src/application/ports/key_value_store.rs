//! Key-Value Store Port - 持久化协作者
//!
//! 字符串 key -> JSON 值。启动时读取一次，每次变更后写回，后写者胜出

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// 持久化使用的 key
pub mod keys {
    pub const USER: &str = "sk_user";
    pub const STORIES: &str = "sk_stories";
    pub const PROMPTS: &str = "sk_prompts";
    pub const BOOK_SIZE: &str = "sk_book_size";
    pub const FONT_STYLE: &str = "sk_font_style";
    pub const COLOR_SCHEME: &str = "sk_color_scheme";
}

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Key-Value Store Port
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// 读取 key 对应的值，不存在时返回 None
    async fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// 写入（覆盖）
    async fn store(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// 删除，key 不存在时不报错
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// 把缓冲写入落盘
    async fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
