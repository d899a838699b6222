//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod book_handlers;
mod editor_handlers;
mod prompt_handlers;
mod session_command_handlers;
mod story_handlers;

pub use book_handlers::*;
pub use editor_handlers::*;
pub use prompt_handlers::*;
pub use session_command_handlers::*;
pub use story_handlers::*;

/// 测试夹具：内存存储 + 默认会话
#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use crate::application::assistant::StoryAssistant;
    use crate::application::session::SessionState;
    use crate::application::session_repository::SessionRepository;
    use crate::infrastructure::adapters::FakeAssistantClient;
    use crate::infrastructure::memory::InMemoryKeyValueStore;

    pub struct Fixture {
        pub store: Arc<InMemoryKeyValueStore>,
        pub state: Arc<SessionState>,
        pub repository: Arc<SessionRepository>,
    }

    pub fn fixture() -> Fixture {
        let store = Arc::new(InMemoryKeyValueStore::new());
        Fixture {
            repository: Arc::new(SessionRepository::new(store.clone())),
            state: Arc::new(SessionState::default()),
            store,
        }
    }

    pub fn fake_assistant() -> Arc<StoryAssistant> {
        let client = Arc::new(FakeAssistantClient::new());
        Arc::new(StoryAssistant::new(client.clone(), client.clone(), client))
    }
}
