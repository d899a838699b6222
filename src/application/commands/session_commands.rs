//! Session Commands - 登录状态相关命令
//!
//! 认证是模拟的：只记录当前用户，不校验凭证

use crate::application::session::User;

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub name: String,
    pub email: String,
}

/// 注册命令
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub name: String,
    pub email: String,
}

/// 登录 / 注册响应
#[derive(Debug, Clone)]
pub struct SessionUserResponse {
    pub user: User,
}

/// 退出命令
#[derive(Debug, Clone, Default)]
pub struct LogoutCommand;
