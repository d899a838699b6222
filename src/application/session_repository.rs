//! Session Repository - 会话状态与 Key-Value Store 之间的映射
//!
//! 启动时调用一次 `load()`，之后每次变更调用对应的 `save_*`

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{keys, KeyValueStorePort, StoreError};
use crate::application::session::{BookSession, User};
use crate::domain::book::{BookCustomization, BookSize, ColorScheme, FontStyle};
use crate::domain::story::{Prompt, Story};

pub struct SessionRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// 读取持久化状态，缺失或损坏的部分使用默认值
    pub async fn load(&self) -> Result<BookSession, ApplicationError> {
        let mut session = BookSession::default();

        if let Some(user) = self.load_typed::<User>(keys::USER).await? {
            session.user = Some(user);
        }
        if let Some(stories) = self.load_typed::<Vec<Story>>(keys::STORIES).await? {
            session.stories = stories;
        }
        if let Some(prompts) = self.load_typed::<Vec<Prompt>>(keys::PROMPTS).await? {
            session.prompts = prompts;
        }

        if let Some(size) = self.load_id(keys::BOOK_SIZE).await? {
            session.customization.size = BookSize::from_str_or_default(&size);
        }
        if let Some(font) = self.load_id(keys::FONT_STYLE).await? {
            session.customization.font = FontStyle::from_str_or_default(&font);
        }
        if let Some(color) = self.load_id(keys::COLOR_SCHEME).await? {
            session.customization.color = ColorScheme::from_str_or_default(&color);
        }

        tracing::info!(
            logged_in = session.user.is_some(),
            stories = session.stories.len(),
            prompts = session.prompts.len(),
            size = %session.customization.size,
            font = %session.customization.font,
            color = %session.customization.color,
            "Session loaded"
        );

        Ok(session)
    }

    pub async fn save_user(&self, user: Option<&User>) -> Result<(), ApplicationError> {
        match user {
            Some(user) => self.store_typed(keys::USER, user).await,
            None => Ok(self.store.remove(keys::USER).await?),
        }
    }

    pub async fn save_stories(&self, stories: &[Story]) -> Result<(), ApplicationError> {
        self.store_typed(keys::STORIES, stories).await
    }

    pub async fn save_prompts(&self, prompts: &[Prompt]) -> Result<(), ApplicationError> {
        self.store_typed(keys::PROMPTS, prompts).await
    }

    pub async fn save_customization(
        &self,
        customization: &BookCustomization,
    ) -> Result<(), ApplicationError> {
        self.store
            .store(keys::BOOK_SIZE, Value::from(customization.size.as_str()))
            .await?;
        self.store
            .store(keys::FONT_STYLE, Value::from(customization.font.as_str()))
            .await?;
        self.store
            .store(keys::COLOR_SCHEME, Value::from(customization.color.as_str()))
            .await?;
        Ok(())
    }

    /// 把整份会话写回（启动时写入种子数据）
    pub async fn save_all(&self, session: &BookSession) -> Result<(), ApplicationError> {
        self.save_user(session.user.as_ref()).await?;
        self.save_stories(&session.stories).await?;
        self.save_prompts(&session.prompts).await?;
        self.save_customization(&session.customization).await
    }

    /// 读取原始值；存储层无法解析的字节按缺失处理
    async fn load_value(&self, key: &str) -> Result<Option<Value>, ApplicationError> {
        match self.store.load(key).await {
            Ok(value) => Ok(value),
            Err(StoreError::SerializationError(e)) => {
                tracing::warn!(key = %key, error = %e, "Ignoring unreadable persisted value");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ApplicationError> {
        let Some(value) = self.load_value(key).await? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring corrupt persisted value");
                Ok(None)
            }
        }
    }

    async fn load_id(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self
            .load_value(key)
            .await?
            .and_then(|v| v.as_str().map(str::to_string)))
    }

    async fn store_typed<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), ApplicationError> {
        let value = serde_json::to_value(value)
            .map_err(|e| ApplicationError::internal(format!("Failed to serialize {}: {}", key, e)))?;
        self.store.store(key, value).await?;
        tracing::debug!(key = %key, "Persisted");
        Ok(())
    }
}
