//! StoryKeeper - 回忆录书籍的分页与章节重排
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事、写作提示、种子数据
//! - Book Context: 分页模型、跨页排版、章节重排、定制选项
//!
//! 应用层 (application/):
//! - Ports: 端口定义（KeyValueStore, AI 协作者）
//! - Session: 单用户会话状态
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 本地 JSON API
//! - Memory / Persistence: 内存与 Sled 存储
//! - Adapters: Gemini 客户端、离线协作者

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
