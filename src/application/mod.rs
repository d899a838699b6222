//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（KeyValueStore、AI 协作者）
//! - session: 单用户会话状态及其持久化映射
//! - assistant: AI 协作者边界（失败降级、同类请求互斥）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod assistant;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod session;
pub mod session_repository;

// Re-exports
pub use assistant::StoryAssistant;

pub use commands::{
    // Book commands
    ChangePageCommand,
    ChangePageResponse,
    ReorderChaptersCommand,
    ReorderChaptersResponse,
    UpdateCustomizationCommand,
    UpdateCustomizationResponse,
    // Editor commands
    IllustrateStoryCommand,
    IllustrateStoryResponse,
    RefineTextCommand,
    RefineTextResponse,
    // Prompt commands
    GeneratePromptCommand,
    GeneratePromptResponse,
    // Session commands
    LoginCommand,
    LogoutCommand,
    SessionUserResponse,
    SignupCommand,
    // Story commands
    SaveStoryCommand,
    SaveStoryResponse,
    // Handlers
    handlers::{
        ChangePageHandler, GeneratePromptHandler, IllustrateStoryHandler, LoginHandler,
        LogoutHandler, RefineTextHandler, ReorderChaptersHandler, SaveStoryHandler, SignupHandler,
        UpdateCustomizationHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    keys, AssistantError, GeneratedPrompt, IllustratorPort, KeyValueStorePort,
    PromptGeneratorPort, StoreError, TextRefinerPort,
};

pub use queries::{
    // Book queries
    BookPageView,
    ChapterEntry,
    GetBookPage,
    GetCustomization,
    PageView,
    SpreadView,
    // Session queries
    GetCurrentUser,
    // Story queries
    GetStory,
    ListPrompts,
    ListStories,
    // Handlers
    handlers::{
        GetBookPageHandler, GetCurrentUserHandler, GetCustomizationHandler, GetStoryHandler,
        ListPromptsHandler, ListStoriesHandler, StoryDraftResponse,
    },
};

pub use session::{BookSession, SessionState, User};
pub use session_repository::SessionRepository;
