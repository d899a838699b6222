//! Story Assistant - AI 协作者边界
//!
//! 端口可能失败；失败在此处被吞掉并记录日志：
//! - 润色失败返回原文
//! - 生成失败返回 None
//!
//! 同类请求在完成前不会重复发起（按类别各自加锁，不同类别可以并发）

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    GeneratedPrompt, IllustratorPort, PromptGeneratorPort, TextRefinerPort,
};

/// 插图请求使用的故事片段长度（字符）
pub const ILLUSTRATION_SNIPPET_CHARS: usize = 500;

/// 单类操作的进行中标记
#[derive(Debug, Default)]
pub struct ActionGate {
    in_flight: AtomicBool,
}

impl ActionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试占用，已被占用时返回 None
    pub fn try_acquire(&self) -> Option<ActionPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ActionPermit { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// 占用凭证，drop 时释放
#[derive(Debug)]
pub struct ActionPermit<'a> {
    gate: &'a ActionGate,
}

impl Drop for ActionPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// AI 协作者边界
pub struct StoryAssistant {
    refiner: Arc<dyn TextRefinerPort>,
    prompt_generator: Arc<dyn PromptGeneratorPort>,
    illustrator: Arc<dyn IllustratorPort>,
    refine_gate: ActionGate,
    prompt_gate: ActionGate,
    illustrate_gate: ActionGate,
}

impl StoryAssistant {
    pub fn new(
        refiner: Arc<dyn TextRefinerPort>,
        prompt_generator: Arc<dyn PromptGeneratorPort>,
        illustrator: Arc<dyn IllustratorPort>,
    ) -> Self {
        Self {
            refiner,
            prompt_generator,
            illustrator,
            refine_gate: ActionGate::new(),
            prompt_gate: ActionGate::new(),
            illustrate_gate: ActionGate::new(),
        }
    }

    /// 润色正文，失败时返回原文
    pub async fn refine(&self, text: &str) -> Result<String, ApplicationError> {
        let _permit = self
            .refine_gate
            .try_acquire()
            .ok_or_else(|| ApplicationError::busy("refine already in progress"))?;

        match self.refiner.refine(text).await {
            Ok(refined) if !refined.trim().is_empty() => {
                tracing::info!(
                    input_chars = text.chars().count(),
                    output_chars = refined.chars().count(),
                    "Story text refined"
                );
                Ok(refined)
            }
            Ok(_) => {
                tracing::warn!("Refiner returned empty text, keeping original");
                Ok(text.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error refining story, keeping original");
                Ok(text.to_string())
            }
        }
    }

    /// 生成新的写作提示，失败时返回 None
    pub async fn generate_prompt(
        &self,
        existing_questions: &[String],
    ) -> Result<Option<GeneratedPrompt>, ApplicationError> {
        let _permit = self
            .prompt_gate
            .try_acquire()
            .ok_or_else(|| ApplicationError::busy("prompt generation already in progress"))?;

        match self.prompt_generator.generate_prompt(existing_questions).await {
            Ok(prompt) => {
                tracing::info!(category = %prompt.category, "Prompt generated");
                Ok(Some(prompt))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error generating prompt");
                Ok(None)
            }
        }
    }

    /// 为故事生成插图，失败时返回 None
    ///
    /// 只发送正文前 500 个字符
    pub async fn illustrate(&self, content: &str) -> Result<Option<String>, ApplicationError> {
        let _permit = self
            .illustrate_gate
            .try_acquire()
            .ok_or_else(|| ApplicationError::busy("illustration already in progress"))?;

        let snippet: String = content.chars().take(ILLUSTRATION_SNIPPET_CHARS).collect();
        match self.illustrator.generate_image(&snippet).await {
            Ok(url) if !url.is_empty() => {
                tracing::info!(image_bytes = url.len(), "Story illustrated");
                Ok(Some(url))
            }
            Ok(_) => {
                tracing::warn!("Illustrator returned no image");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error generating image");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AssistantError;
    use crate::domain::story::PromptCategory;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// 总是失败的协作者
    struct Failing;

    #[async_trait]
    impl TextRefinerPort for Failing {
        async fn refine(&self, _text: &str) -> Result<String, AssistantError> {
            Err(AssistantError::Timeout)
        }
    }

    #[async_trait]
    impl PromptGeneratorPort for Failing {
        async fn generate_prompt(&self, _q: &[String]) -> Result<GeneratedPrompt, AssistantError> {
            Err(AssistantError::ServiceError("quota".into()))
        }
    }

    #[async_trait]
    impl IllustratorPort for Failing {
        async fn generate_image(&self, _snippet: &str) -> Result<String, AssistantError> {
            Err(AssistantError::EmptyResponse)
        }
    }

    /// 记录收到的片段，并在 release 之前阻塞
    #[derive(Default)]
    struct Recording {
        snippets: Mutex<Vec<String>>,
        release: Notify,
    }

    #[async_trait]
    impl IllustratorPort for Recording {
        async fn generate_image(&self, snippet: &str) -> Result<String, AssistantError> {
            self.snippets.lock().unwrap().push(snippet.to_string());
            self.release.notified().await;
            Ok("data:image/png;base64,AAAA".to_string())
        }
    }

    #[async_trait]
    impl TextRefinerPort for Recording {
        async fn refine(&self, text: &str) -> Result<String, AssistantError> {
            Ok(text.to_uppercase())
        }
    }

    #[async_trait]
    impl PromptGeneratorPort for Recording {
        async fn generate_prompt(&self, _q: &[String]) -> Result<GeneratedPrompt, AssistantError> {
            Ok(GeneratedPrompt {
                question: "What song reminds you of home?".into(),
                category: PromptCategory::Family,
            })
        }
    }

    fn failing() -> StoryAssistant {
        let port = Arc::new(Failing);
        StoryAssistant::new(port.clone(), port.clone(), port)
    }

    #[tokio::test]
    async fn test_failures_degrade_to_no_change() {
        let assistant = failing();

        assert_eq!(assistant.refine("my story").await.unwrap(), "my story");
        assert_eq!(assistant.generate_prompt(&[]).await.unwrap(), None);
        assert_eq!(assistant.illustrate("my story").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_gates_are_released_after_failure() {
        let assistant = failing();
        assistant.refine("a").await.unwrap();
        assert!(!assistant.refine_gate.is_busy());
        assert!(assistant.refine("b").await.is_ok());
    }

    #[test]
    fn test_gate_rejects_second_acquire() {
        let gate = ActionGate::new();
        let permit = gate.try_acquire();
        assert!(permit.is_some());
        assert!(gate.try_acquire().is_none());
        drop(permit);
        assert!(gate.try_acquire().is_some());
    }

    #[tokio::test]
    async fn test_same_kind_is_rejected_while_in_flight() {
        let port = Arc::new(Recording::default());
        let assistant = Arc::new(StoryAssistant::new(port.clone(), port.clone(), port.clone()));

        let first = {
            let assistant = assistant.clone();
            tokio::spawn(async move { assistant.illustrate("first").await })
        };
        while !assistant.illustrate_gate.is_busy() {
            tokio::task::yield_now().await;
        }

        // 同类请求被拒绝，不同类请求照常执行
        assert!(matches!(
            assistant.illustrate("second").await,
            Err(ApplicationError::Busy(_))
        ));
        assert_eq!(assistant.refine("abc").await.unwrap(), "ABC");

        port.release.notify_one();
        let url = first.await.unwrap().unwrap();
        assert_eq!(url.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(port.snippets.lock().unwrap().as_slice(), ["first".to_string()]);
    }

    #[tokio::test]
    async fn test_illustration_snippet_is_truncated() {
        let port = Arc::new(Recording::default());
        let assistant = StoryAssistant::new(port.clone(), port.clone(), port.clone());
        port.release.notify_one();

        let content = "回".repeat(800);
        assistant.illustrate(&content).await.unwrap();

        let snippets = port.snippets.lock().unwrap();
        assert_eq!(snippets[0].chars().count(), ILLUSTRATION_SNIPPET_CHARS);
    }
}
