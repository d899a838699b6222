//! Prompt Command Handlers

use std::sync::Arc;

use crate::application::assistant::StoryAssistant;
use crate::application::commands::prompt_commands::*;
use crate::application::error::ApplicationError;
use crate::application::session::SessionState;
use crate::application::session_repository::SessionRepository;
use crate::domain::story::Prompt;

/// GeneratePrompt Handler - 由 AI 生成提示并插到最前
pub struct GeneratePromptHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
    assistant: Arc<StoryAssistant>,
}

impl GeneratePromptHandler {
    pub fn new(
        state: Arc<SessionState>,
        repository: Arc<SessionRepository>,
        assistant: Arc<StoryAssistant>,
    ) -> Self {
        Self {
            state,
            repository,
            assistant,
        }
    }

    pub async fn handle(&self, _cmd: GeneratePromptCommand) -> Result<GeneratePromptResponse, ApplicationError> {
        // 锁只用于取快照，不跨 AI 调用持有
        let questions: Vec<String> = {
            let session = self.state.lock().await;
            session.prompts.iter().map(|p| p.question.clone()).collect()
        };

        let Some(generated) = self.assistant.generate_prompt(&questions).await? else {
            return Ok(GeneratePromptResponse { prompt: None });
        };

        let prompt = match Prompt::try_new(generated.question, generated.category) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding generated prompt");
                return Ok(GeneratePromptResponse { prompt: None });
            }
        };

        let mut session = self.state.lock().await;
        let mut prompts = Vec::with_capacity(session.prompts.len() + 1);
        prompts.push(prompt.clone());
        prompts.extend(session.prompts.iter().cloned());

        self.repository.save_prompts(&prompts).await?;
        session.prompts = prompts;

        tracing::info!(
            prompt_id = %prompt.id,
            category = %prompt.category,
            total_prompts = session.prompts.len(),
            "Prompt added"
        );

        Ok(GeneratePromptResponse {
            prompt: Some(prompt),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::fixtures::{fake_assistant, fixture};
    use crate::application::ports::{
        AssistantError, GeneratedPrompt, IllustratorPort, PromptGeneratorPort, TextRefinerPort,
    };
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_generated_prompt_is_prepended() {
        let f = fixture();
        let handler = GeneratePromptHandler::new(f.state.clone(), f.repository.clone(), fake_assistant());

        let resp = handler.handle(GeneratePromptCommand).await.unwrap();
        let prompt = resp.prompt.unwrap();
        assert!(!prompt.is_answered);

        let session = f.state.lock().await;
        assert_eq!(session.prompts.len(), 11);
        assert_eq!(session.prompts[0], prompt);
        assert!(session.prompts[1..].iter().all(|p| p.question != prompt.question));
    }

    struct Unavailable;

    #[async_trait]
    impl TextRefinerPort for Unavailable {
        async fn refine(&self, _text: &str) -> Result<String, AssistantError> {
            Err(AssistantError::NetworkError("offline".into()))
        }
    }

    #[async_trait]
    impl PromptGeneratorPort for Unavailable {
        async fn generate_prompt(&self, _q: &[String]) -> Result<GeneratedPrompt, AssistantError> {
            Err(AssistantError::NetworkError("offline".into()))
        }
    }

    #[async_trait]
    impl IllustratorPort for Unavailable {
        async fn generate_image(&self, _snippet: &str) -> Result<String, AssistantError> {
            Err(AssistantError::NetworkError("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_failed_generation_changes_nothing() {
        let f = fixture();
        let port = Arc::new(Unavailable);
        let assistant = Arc::new(StoryAssistant::new(port.clone(), port.clone(), port));
        let handler = GeneratePromptHandler::new(f.state.clone(), f.repository.clone(), assistant);

        let resp = handler.handle(GeneratePromptCommand).await.unwrap();
        assert!(resp.prompt.is_none());
        assert_eq!(f.state.lock().await.prompts.len(), 10);
    }
}
