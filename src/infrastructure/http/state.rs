//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ChangePageHandler, GeneratePromptHandler, IllustrateStoryHandler, LoginHandler, LogoutHandler,
    RefineTextHandler, ReorderChaptersHandler, SaveStoryHandler, SignupHandler,
    UpdateCustomizationHandler,
    // Query handlers
    GetBookPageHandler, GetCurrentUserHandler, GetCustomizationHandler, GetStoryHandler,
    ListPromptsHandler, ListStoriesHandler,
    // Session & ports
    KeyValueStorePort, SessionRepository, SessionState, StoryAssistant,
};

/// 应用状态
///
/// 所有 handler 共享同一个会话状态；store 用于退出前落盘
pub struct AppState {
    // ========== Shared ==========
    pub store: Arc<dyn KeyValueStorePort>,

    // ========== Command Handlers ==========
    pub login_handler: LoginHandler,
    pub signup_handler: SignupHandler,
    pub logout_handler: LogoutHandler,
    pub save_story_handler: SaveStoryHandler,
    pub generate_prompt_handler: GeneratePromptHandler,
    pub refine_text_handler: RefineTextHandler,
    pub illustrate_story_handler: IllustrateStoryHandler,
    pub change_page_handler: ChangePageHandler,
    pub reorder_chapters_handler: ReorderChaptersHandler,
    pub update_customization_handler: UpdateCustomizationHandler,

    // ========== Query Handlers ==========
    pub get_current_user_handler: GetCurrentUserHandler,
    pub list_stories_handler: ListStoriesHandler,
    pub get_story_handler: GetStoryHandler,
    pub list_prompts_handler: ListPromptsHandler,
    pub get_book_page_handler: GetBookPageHandler,
    pub get_customization_handler: GetCustomizationHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session: Arc<SessionState>,
        store: Arc<dyn KeyValueStorePort>,
        assistant: Arc<StoryAssistant>,
    ) -> Self {
        let repository = Arc::new(SessionRepository::new(store.clone()));

        Self {
            // Command handlers
            login_handler: LoginHandler::new(session.clone(), repository.clone()),
            signup_handler: SignupHandler::new(session.clone(), repository.clone()),
            logout_handler: LogoutHandler::new(session.clone(), repository.clone()),
            save_story_handler: SaveStoryHandler::new(session.clone(), repository.clone()),
            generate_prompt_handler: GeneratePromptHandler::new(
                session.clone(),
                repository.clone(),
                assistant.clone(),
            ),
            refine_text_handler: RefineTextHandler::new(assistant.clone()),
            illustrate_story_handler: IllustrateStoryHandler::new(assistant),
            change_page_handler: ChangePageHandler::new(session.clone()),
            reorder_chapters_handler: ReorderChaptersHandler::new(session.clone(), repository.clone()),
            update_customization_handler: UpdateCustomizationHandler::new(session.clone(), repository),

            // Query handlers
            get_current_user_handler: GetCurrentUserHandler::new(session.clone()),
            list_stories_handler: ListStoriesHandler::new(session.clone()),
            get_story_handler: GetStoryHandler::new(session.clone()),
            list_prompts_handler: ListPromptsHandler::new(session.clone()),
            get_book_page_handler: GetBookPageHandler::new(session.clone()),
            get_customization_handler: GetCustomizationHandler::new(session),

            // Shared
            store,
        }
    }
}
