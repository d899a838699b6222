//! Story Command Handlers

use std::sync::Arc;

use crate::application::commands::story_commands::*;
use crate::application::error::ApplicationError;
use crate::application::session::SessionState;
use crate::application::session_repository::SessionRepository;
use crate::domain::story::{Story, StoryError};

/// SaveStory Handler - 创建或原位替换章节
pub struct SaveStoryHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl SaveStoryHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(&self, cmd: SaveStoryCommand) -> Result<SaveStoryResponse, ApplicationError> {
        let mut session = self.state.lock().await;

        let prompt = session
            .find_prompt(&cmd.prompt_id)
            .cloned()
            .ok_or_else(|| StoryError::PromptNotFound(cmd.prompt_id.clone()))?;

        // 标题为空时用问题本身
        let title = match cmd.title.trim() {
            "" => prompt.question.clone(),
            title => title.to_string(),
        };

        // 同一提示最多一个故事：按 id 或按提示定位已有章节
        let position = session.stories.iter().position(|s| {
            cmd.id.as_ref() == Some(&s.id) || s.prompt_id == cmd.prompt_id
        });
        if let Some(pos) = position {
            if session.stories[pos].prompt_id != cmd.prompt_id {
                return Err(ApplicationError::validation(format!(
                    "Story {} answers a different prompt",
                    session.stories[pos].id
                )));
            }
        }

        let mut story = Story::new(cmd.prompt_id.clone(), title, cmd.content)
            .with_image(cmd.image_url)
            .with_status(cmd.status.unwrap_or_default());
        if let Some(pos) = position {
            let existing = &session.stories[pos];
            story.id = existing.id.clone();
            story.date_created = existing.date_created;
        }
        story.validate()?;

        let mut stories = session.stories.clone();
        match position {
            Some(pos) => stories[pos] = story.clone(),
            None => stories.push(story.clone()),
        }

        let mut prompts = session.prompts.clone();
        let mut answered = prompt;
        for p in prompts.iter_mut().filter(|p| p.id == cmd.prompt_id) {
            p.mark_answered();
            answered = p.clone();
        }

        // 先写提示，故事写入失败时回滚提示，避免重新加载后出现未回答却有故事的提示
        self.repository.save_prompts(&prompts).await?;
        if let Err(e) = self.repository.save_stories(&stories).await {
            if let Err(rollback) = self.repository.save_prompts(&session.prompts).await {
                tracing::warn!(
                    prompt_id = %cmd.prompt_id,
                    error = %rollback,
                    "Failed to roll back prompts after story write failure"
                );
            }
            return Err(e);
        }

        session.stories = stories;
        session.prompts = prompts;
        session.clamp_current_page();

        let created = position.is_none();
        tracing::info!(
            story_id = %story.id,
            prompt_id = %story.prompt_id,
            created = created,
            chars = story.char_count(),
            has_image = story.has_image(),
            "Story saved"
        );

        Ok(SaveStoryResponse {
            story,
            prompt: answered,
            created,
            stories_count: session.stories_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::fixtures::fixture;
    use crate::application::ports::{keys, KeyValueStorePort, StoreError};
    use crate::application::session::SessionState;
    use crate::domain::story::{PromptId, StoryId, StoryStatus};
    use crate::infrastructure::memory::InMemoryKeyValueStore;
    use async_trait::async_trait;
    use serde_json::Value;

    /// 对指定 key 的写入总是失败
    struct FailingStore {
        inner: InMemoryKeyValueStore,
        failing_key: &'static str,
    }

    #[async_trait]
    impl KeyValueStorePort for FailingStore {
        async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
            self.inner.load(key).await
        }

        async fn store(&self, key: &str, value: Value) -> Result<(), StoreError> {
            if key == self.failing_key {
                return Err(StoreError::IoError("disk full".to_string()));
            }
            self.inner.store(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
    }

    fn failing_handler(failing_key: &'static str) -> (Arc<FailingStore>, Arc<SessionState>, SaveStoryHandler) {
        let store = Arc::new(FailingStore {
            inner: InMemoryKeyValueStore::new(),
            failing_key,
        });
        let state = Arc::new(SessionState::default());
        let repository = Arc::new(SessionRepository::new(store.clone()));
        let handler = SaveStoryHandler::new(state.clone(), repository);
        (store, state, handler)
    }

    fn save(prompt_id: &str, title: &str, content: &str) -> SaveStoryCommand {
        SaveStoryCommand {
            id: None,
            prompt_id: PromptId::from(prompt_id),
            title: title.into(),
            content: content.into(),
            image_url: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_new_story_is_appended_and_prompt_answered() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let resp = handler.handle(save("5", "The Flood", "Water everywhere.")).await.unwrap();

        assert!(resp.created);
        assert!(resp.prompt.is_answered);
        assert_eq!(resp.stories_count, 4);
        assert_eq!(resp.story.status, StoryStatus::Completed);

        let session = f.state.lock().await;
        assert_eq!(session.stories.last().map(|s| &s.id), Some(&resp.story.id));
        assert!(session.find_prompt(&PromptId::from("5")).unwrap().is_answered);

        let stored = f.store.load(keys::STORIES).await.unwrap().unwrap();
        assert_eq!(stored.as_array().map(Vec::len), Some(4));
        let prompts = f.store.load(keys::PROMPTS).await.unwrap().unwrap();
        assert_eq!(prompts[4]["isAnswered"], true);
    }

    #[tokio::test]
    async fn test_existing_story_is_replaced_in_place() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());
        let original_date = f.state.lock().await.stories[1].date_created;

        let mut cmd = save("2", "Coffee, Rain and Muffins", "Rewritten.");
        cmd.id = Some(StoryId::from("s2"));
        cmd.image_url = Some(String::new());
        let resp = handler.handle(cmd).await.unwrap();

        assert!(!resp.created);
        assert_eq!(resp.story.id, StoryId::from("s2"));
        assert_eq!(resp.story.date_created, original_date);
        assert_eq!(resp.story.image_url, None);

        let session = f.state.lock().await;
        assert_eq!(session.stories_count(), 3);
        assert_eq!(session.stories[1].title, "Coffee, Rain and Muffins");
    }

    #[tokio::test]
    async fn test_second_story_for_prompt_replaces_first() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let first = handler.handle(save("7", "Advice", "Measure twice.")).await.unwrap();
        let second = handler.handle(save("7", "Advice", "Cut once.")).await.unwrap();

        assert!(!second.created);
        assert_eq!(second.story.id, first.story.id);
        assert_eq!(f.state.lock().await.stories_count(), 4);
    }

    #[tokio::test]
    async fn test_blank_title_uses_question() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let resp = handler.handle(save("5", "  ", "Brave.")).await.unwrap();
        assert_eq!(resp.story.title, "Tell a story about a time you were truly brave.");

    }

    #[tokio::test]
    async fn test_long_title_is_kept_whole() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let title = "A very long title ".repeat(20);
        let resp = handler.handle(save("6", &title, "Content.")).await.unwrap();
        assert_eq!(resp.story.title, title.trim());
    }

    #[tokio::test]
    async fn test_unknown_prompt_is_rejected() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let result = handler.handle(save("404", "t", "c")).await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        assert_eq!(f.state.lock().await.stories_count(), 3);
    }

    #[tokio::test]
    async fn test_id_of_another_prompt_is_rejected() {
        let f = fixture();
        let handler = SaveStoryHandler::new(f.state.clone(), f.repository.clone());

        let mut cmd = save("5", "t", "c");
        cmd.id = Some(StoryId::from("s1"));
        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_failed_story_write_leaves_store_consistent() {
        let (store, state, handler) = failing_handler(keys::STORIES);

        let result = handler.handle(save("5", "The Flood", "Water everywhere.")).await;
        assert!(matches!(result, Err(ApplicationError::StorageError(_))));

        // 提示已回滚为未回答，且没有写入故事
        assert!(store.load(keys::STORIES).await.unwrap().is_none());
        let prompts = store.load(keys::PROMPTS).await.unwrap().unwrap();
        assert_eq!(prompts[4]["id"], "5");
        assert_eq!(prompts[4]["isAnswered"], false);

        let session = state.lock().await;
        assert_eq!(session.stories_count(), 3);
        assert!(!session.find_prompt(&PromptId::from("5")).unwrap().is_answered);
    }

    #[tokio::test]
    async fn test_failed_prompt_write_persists_nothing() {
        let (store, state, handler) = failing_handler(keys::PROMPTS);

        assert!(handler.handle(save("5", "The Flood", "Water.")).await.is_err());
        assert!(store.load(keys::STORIES).await.unwrap().is_none());
        assert_eq!(state.lock().await.stories_count(), 3);
    }
}
