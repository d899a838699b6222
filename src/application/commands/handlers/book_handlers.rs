//! Book Command Handlers - 翻页、章节重排、定制
//!
//! 每个事件在会话锁内完成 计算-持久化-提交，后续事件看到的一定是已提交的状态

use std::sync::Arc;

use crate::application::commands::book_commands::*;
use crate::application::error::ApplicationError;
use crate::application::queries::BookPageView;
use crate::application::session::SessionState;
use crate::application::session_repository::SessionRepository;
use crate::domain::book::{reindex_after_reorder, reorder_by_id};

/// ChangePage Handler
pub struct ChangePageHandler {
    state: Arc<SessionState>,
}

impl ChangePageHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, cmd: ChangePageCommand) -> Result<ChangePageResponse, ApplicationError> {
        let mut session = self.state.lock().await;
        let previous_index = session.current_page;
        session.current_page = cmd.navigation.apply(previous_index, session.stories_count());

        tracing::debug!(
            from = previous_index,
            to = session.current_page,
            navigation = ?cmd.navigation,
            "Page changed"
        );

        Ok(ChangePageResponse {
            previous_index,
            page: BookPageView::build(&session),
        })
    }
}

/// ReorderChapters Handler - 拖放结束时按 id 重排
pub struct ReorderChaptersHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl ReorderChaptersHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(&self, cmd: ReorderChaptersCommand) -> Result<ReorderChaptersResponse, ApplicationError> {
        let mut session = self.state.lock().await;

        let moved = match reorder_by_id(&session.stories, &cmd.active_id, &cmd.over_id) {
            Some(stories) => {
                self.repository.save_stories(&stories).await?;
                session.stories = stories;
                // 页索引按数字位置保持不变
                session.current_page =
                    reindex_after_reorder(session.current_page, session.stories_count());

                tracing::info!(
                    active_id = %cmd.active_id,
                    over_id = %cmd.over_id,
                    current_page = session.current_page,
                    "Chapters reordered"
                );
                true
            }
            None => {
                tracing::debug!(
                    active_id = %cmd.active_id,
                    over_id = %cmd.over_id,
                    "Reorder ignored"
                );
                false
            }
        };

        Ok(ReorderChaptersResponse {
            moved,
            order: session.stories.iter().map(|s| s.id.clone()).collect(),
            current_page: session.current_page,
        })
    }
}

/// UpdateCustomization Handler
pub struct UpdateCustomizationHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl UpdateCustomizationHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCustomizationCommand,
    ) -> Result<UpdateCustomizationResponse, ApplicationError> {
        let mut session = self.state.lock().await;

        let mut customization = session.customization;
        if let Some(size) = cmd.size {
            customization.size = size;
        }
        if let Some(font) = cmd.font {
            customization.font = font;
        }
        if let Some(color) = cmd.color {
            customization.color = color;
        }

        if customization != session.customization {
            self.repository.save_customization(&customization).await?;
            session.customization = customization;

            tracing::info!(
                size = %customization.size,
                font = %customization.font,
                color = %customization.color,
                "Book customization updated"
            );
        }

        Ok(UpdateCustomizationResponse { customization })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::fixtures::fixture;
    use crate::application::ports::{keys, KeyValueStorePort};
    use crate::application::queries::PageView;
    use crate::domain::book::{BookSize, ColorScheme, Navigation};
    use crate::domain::story::StoryId;

    fn ids(order: &[StoryId]) -> Vec<&str> {
        order.iter().map(StoryId::as_str).collect()
    }

    #[tokio::test]
    async fn test_navigation_saturates_at_both_ends() {
        let f = fixture();
        let handler = ChangePageHandler::new(f.state.clone());

        let resp = handler
            .handle(ChangePageCommand { navigation: Navigation::Previous })
            .await
            .unwrap();
        assert_eq!(resp.page.index, 0);

        for _ in 0..10 {
            handler
                .handle(ChangePageCommand { navigation: Navigation::Next })
                .await
                .unwrap();
        }
        let resp = handler
            .handle(ChangePageCommand { navigation: Navigation::Next })
            .await
            .unwrap();
        assert_eq!(resp.previous_index, 4);
        assert_eq!(resp.page.index, 4);
        assert_eq!(resp.page.content, PageView::BackCover);
    }

    #[tokio::test]
    async fn test_jump_is_clamped() {
        let f = fixture();
        let handler = ChangePageHandler::new(f.state.clone());

        let resp = handler
            .handle(ChangePageCommand { navigation: Navigation::JumpTo(2) })
            .await
            .unwrap();
        assert_eq!(resp.page.label, "Chapter 2 of 3");

        let resp = handler
            .handle(ChangePageCommand { navigation: Navigation::JumpTo(-3) })
            .await
            .unwrap();
        assert_eq!(resp.page.index, 0);
    }

    #[tokio::test]
    async fn test_reorder_keeps_numeric_slot() {
        let f = fixture();
        f.state.lock().await.current_page = 1;
        let handler = ReorderChaptersHandler::new(f.state.clone(), f.repository.clone());

        let resp = handler
            .handle(ReorderChaptersCommand {
                active_id: StoryId::from("s1"),
                over_id: StoryId::from("s3"),
            })
            .await
            .unwrap();

        assert!(resp.moved);
        assert_eq!(ids(&resp.order), ["s2", "s3", "s1"]);
        assert_eq!(resp.current_page, 1);

        // 同一页码现在显示的是 s2
        let view = BookPageView::build(&*f.state.lock().await);
        let PageView::StorySpread(spread) = view.content else {
            panic!("expected a story spread");
        };
        assert_eq!(spread.story_id, StoryId::from("s2"));

        let stored = f.store.load(keys::STORIES).await.unwrap().unwrap();
        assert_eq!(stored[2]["id"], "s1");
    }

    #[tokio::test]
    async fn test_reorder_with_unknown_id_is_noop() {
        let f = fixture();
        let handler = ReorderChaptersHandler::new(f.state.clone(), f.repository.clone());

        let resp = handler
            .handle(ReorderChaptersCommand {
                active_id: StoryId::from("s1"),
                over_id: StoryId::from("gone"),
            })
            .await
            .unwrap();

        assert!(!resp.moved);
        assert_eq!(ids(&resp.order), ["s1", "s2", "s3"]);
        assert!(f.store.load(keys::STORIES).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_customization_subset() {
        let f = fixture();
        let handler = UpdateCustomizationHandler::new(f.state.clone(), f.repository.clone());

        let resp = handler
            .handle(UpdateCustomizationCommand {
                size: Some(BookSize::Landscape),
                color: Some(ColorScheme::Parchment),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(resp.customization.size, BookSize::Landscape);
        assert_eq!(resp.customization.color, ColorScheme::Parchment);
        assert_eq!(f.state.lock().await.customization, resp.customization);
        assert_eq!(
            f.store.load(keys::BOOK_SIZE).await.unwrap(),
            Some(serde_json::json!("landscape"))
        );
    }
}
