//! Session Command Handlers - 模拟登录 / 注册 / 退出

use std::sync::Arc;

use crate::application::commands::session_commands::*;
use crate::application::error::ApplicationError;
use crate::application::session::{SessionState, User};
use crate::application::session_repository::SessionRepository;

/// 登录时使用的固定用户 id
pub const LOGIN_USER_ID: &str = "1";

/// 登录未填写名字时显示的名字
pub const DEFAULT_USER_NAME: &str = "John Doe";

fn validate_email(email: &str) -> Result<String, ApplicationError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApplicationError::validation(format!("Invalid email: {:?}", email)));
    }
    Ok(email.to_string())
}

/// Login Handler
pub struct LoginHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl LoginHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<SessionUserResponse, ApplicationError> {
        let email = validate_email(&cmd.email)?;
        let name = match cmd.name.trim() {
            "" => DEFAULT_USER_NAME.to_string(),
            name => name.to_string(),
        };
        let user = User {
            id: LOGIN_USER_ID.to_string(),
            name,
            email,
        };

        let mut session = self.state.lock().await;
        self.repository.save_user(Some(&user)).await?;
        session.user = Some(user.clone());

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(SessionUserResponse { user })
    }
}

/// Signup Handler
pub struct SignupHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl SignupHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<SessionUserResponse, ApplicationError> {
        let email = validate_email(&cmd.email)?;
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("Name is required"));
        }
        let user = User::new(name, email);

        let mut session = self.state.lock().await;
        self.repository.save_user(Some(&user)).await?;
        session.user = Some(user.clone());

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(SessionUserResponse { user })
    }
}

/// Logout Handler
pub struct LogoutHandler {
    state: Arc<SessionState>,
    repository: Arc<SessionRepository>,
}

impl LogoutHandler {
    pub fn new(state: Arc<SessionState>, repository: Arc<SessionRepository>) -> Self {
        Self { state, repository }
    }

    pub async fn handle(&self, _cmd: LogoutCommand) -> Result<(), ApplicationError> {
        let mut session = self.state.lock().await;
        self.repository.save_user(None).await?;

        if let Some(user) = session.user.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        Ok(())
    }
}
