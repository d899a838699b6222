//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod key_value_store;
mod story_assistant;

pub use key_value_store::{keys, KeyValueStorePort, StoreError};
pub use story_assistant::{
    AssistantError, GeneratedPrompt, IllustratorPort, PromptGeneratorPort, TextRefinerPort,
};
