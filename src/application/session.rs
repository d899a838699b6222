//! Book Session - 单用户会话状态
//!
//! 故事集合与页索引只归会话所有。分页与重排函数接收其值并返回新值，
//! 由命令处理器在持有锁的情况下提交，保证事件按派发顺序生效。

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::book::{clamp, BookCustomization, PageIndex, FRONT_COVER};
use crate::domain::story::{default_prompts, default_stories, Prompt, PromptId, Story};

/// 登录用户（模拟认证）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// 会话状态快照
#[derive(Debug, Clone)]
pub struct BookSession {
    pub user: Option<User>,
    pub stories: Vec<Story>,
    pub prompts: Vec<Prompt>,
    pub customization: BookCustomization,
    /// 视图状态，不持久化
    pub current_page: PageIndex,
}

impl Default for BookSession {
    fn default() -> Self {
        Self {
            user: None,
            stories: default_stories(),
            prompts: default_prompts(),
            customization: BookCustomization::default(),
            current_page: FRONT_COVER,
        }
    }
}

impl BookSession {
    pub fn stories_count(&self) -> usize {
        self.stories.len()
    }

    pub fn find_prompt(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    pub fn story_for_prompt(&self, id: &PromptId) -> Option<&Story> {
        self.stories.iter().find(|s| &s.prompt_id == id)
    }

    /// 故事数量变化后收回页索引
    pub fn clamp_current_page(&mut self) {
        let current = i64::try_from(self.current_page).unwrap_or(i64::MAX);
        self.current_page = clamp(current, self.stories.len());
    }
}

/// 进程内唯一的会话状态
///
/// 所有状态迁移都经过这把锁；锁不会跨 AI 调用持有
pub struct SessionState {
    inner: Mutex<BookSession>,
}

impl SessionState {
    pub fn new(session: BookSession) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    /// 获取独占访问，用于 读取-计算-提交
    pub async fn lock(&self) -> MutexGuard<'_, BookSession> {
        self.inner.lock().await
    }

    /// 获取当前快照
    pub async fn snapshot(&self) -> BookSession {
        self.inner.lock().await.clone()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(BookSession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_uses_seed_data() {
        let session = BookSession::default();
        assert!(session.user.is_none());
        assert_eq!(session.stories_count(), 3);
        assert_eq!(session.current_page, FRONT_COVER);
        assert!(session.story_for_prompt(&PromptId::from("1")).is_some());
        assert!(session.story_for_prompt(&PromptId::from("5")).is_none());
    }

    #[test]
    fn test_clamp_current_page() {
        let mut session = BookSession::default();
        session.current_page = 17;
        session.clamp_current_page();
        assert_eq!(session.current_page, 4);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let state = SessionState::default();
        let mut snapshot = state.snapshot().await;
        snapshot.stories.clear();

        assert_eq!(state.lock().await.stories_count(), 3);
    }
}
