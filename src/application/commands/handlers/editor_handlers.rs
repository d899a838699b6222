//! Editor Command Handlers - AI 润色与插图
//!
//! 结果只返回给调用方，是否采用由编辑器决定

use std::sync::Arc;

use crate::application::assistant::StoryAssistant;
use crate::application::commands::editor_commands::*;
use crate::application::error::ApplicationError;

/// RefineText Handler
pub struct RefineTextHandler {
    assistant: Arc<StoryAssistant>,
}

impl RefineTextHandler {
    pub fn new(assistant: Arc<StoryAssistant>) -> Self {
        Self { assistant }
    }

    pub async fn handle(&self, cmd: RefineTextCommand) -> Result<RefineTextResponse, ApplicationError> {
        if cmd.text.trim().is_empty() {
            return Ok(RefineTextResponse {
                text: cmd.text,
                changed: false,
            });
        }

        let refined = self.assistant.refine(&cmd.text).await?;
        let changed = refined != cmd.text;
        Ok(RefineTextResponse {
            text: refined,
            changed,
        })
    }
}

/// IllustrateStory Handler
pub struct IllustrateStoryHandler {
    assistant: Arc<StoryAssistant>,
}

impl IllustrateStoryHandler {
    pub fn new(assistant: Arc<StoryAssistant>) -> Self {
        Self { assistant }
    }

    pub async fn handle(&self, cmd: IllustrateStoryCommand) -> Result<IllustrateStoryResponse, ApplicationError> {
        if cmd.content.trim().is_empty() {
            return Ok(IllustrateStoryResponse { image_url: None });
        }

        let image_url = self.assistant.illustrate(&cmd.content).await?;
        Ok(IllustrateStoryResponse { image_url })
    }
}
