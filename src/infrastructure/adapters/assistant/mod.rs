//! Assistant Adapter - AI 协作者实现
//!
//! - GeminiClient: 调用 Gemini generateContent REST API
//! - FakeAssistantClient: 离线、确定性的实现，用于未配置 API key 时和测试

mod fake_assistant_client;
mod gemini_client;

pub use fake_assistant_client::FakeAssistantClient;
pub use gemini_client::{GeminiClient, GeminiClientConfig};
