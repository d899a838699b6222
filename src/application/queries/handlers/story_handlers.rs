//! Story Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetStory, ListPrompts, ListStories};
use crate::application::session::SessionState;
use crate::domain::story::{Prompt, Story};

/// 编辑器数据：提示本身及已有的回答
#[derive(Debug, Clone)]
pub struct StoryDraftResponse {
    pub prompt: Prompt,
    pub story: Option<Story>,
}

/// ListStories Handler
pub struct ListStoriesHandler {
    state: Arc<SessionState>,
}

impl ListStoriesHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, _query: ListStories) -> Result<Vec<Story>, ApplicationError> {
        Ok(self.state.lock().await.stories.clone())
    }
}

/// GetStory Handler
pub struct GetStoryHandler {
    state: Arc<SessionState>,
}

impl GetStoryHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, query: GetStory) -> Result<StoryDraftResponse, ApplicationError> {
        let session = self.state.lock().await;
        let prompt = session
            .find_prompt(&query.prompt_id)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Prompt", &query.prompt_id))?;

        Ok(StoryDraftResponse {
            story: session.story_for_prompt(&query.prompt_id).cloned(),
            prompt,
        })
    }
}

/// ListPrompts Handler
pub struct ListPromptsHandler {
    state: Arc<SessionState>,
}

impl ListPromptsHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, query: ListPrompts) -> Result<Vec<Prompt>, ApplicationError> {
        let session = self.state.lock().await;
        Ok(session
            .prompts
            .iter()
            .filter(|p| query.category.map_or(true, |c| p.category == c))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::{PromptCategory, PromptId};

    fn state() -> Arc<SessionState> {
        Arc::new(SessionState::default())
    }

    #[tokio::test]
    async fn test_list_stories_in_chapter_order() {
        let stories = ListStoriesHandler::new(state()).handle(ListStories).await.unwrap();
        let ids: Vec<_> = stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn test_get_story_for_answered_and_open_prompt() {
        let handler = GetStoryHandler::new(state());

        let answered = handler
            .handle(GetStory { prompt_id: PromptId::from("1") })
            .await
            .unwrap();
        assert!(answered.prompt.is_answered);
        assert!(answered.story.is_some());

        let open = handler
            .handle(GetStory { prompt_id: PromptId::from("5") })
            .await
            .unwrap();
        assert!(open.story.is_none());
    }

    #[tokio::test]
    async fn test_get_story_unknown_prompt() {
        let result = GetStoryHandler::new(state())
            .handle(GetStory { prompt_id: PromptId::from("nope") })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_prompts_by_category() {
        let handler = ListPromptsHandler::new(state());
        let all = handler.handle(ListPrompts::default()).await.unwrap();
        assert_eq!(all.len(), 10);

        let wisdom = handler
            .handle(ListPrompts { category: Some(PromptCategory::Wisdom) })
            .await
            .unwrap();
        assert!(!wisdom.is_empty());
        assert!(wisdom.iter().all(|p| p.category == PromptCategory::Wisdom));
    }
}
