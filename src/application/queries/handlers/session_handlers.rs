//! Session Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::GetCurrentUser;
use crate::application::session::{SessionState, User};

/// GetCurrentUser Handler
pub struct GetCurrentUserHandler {
    state: Arc<SessionState>,
}

impl GetCurrentUserHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    /// 未登录时返回 None
    pub async fn handle(&self, _query: GetCurrentUser) -> Result<Option<User>, ApplicationError> {
        Ok(self.state.lock().await.user.clone())
    }
}
