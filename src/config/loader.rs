//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml / config.local.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, AssistantProvider, StorageBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "STORYKEEPER";

/// 未配置 `assistant.api_key` 时读取的环境变量
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 加载应用配置
///
/// # 环境变量示例
/// - `STORYKEEPER_SERVER__PORT=8080`
/// - `STORYKEEPER_STORAGE__BACKEND=memory`
/// - `STORYKEEPER_ASSISTANT__API_KEY=...`（或 `GEMINI_API_KEY`）
/// - `STORYKEEPER_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索当前目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("storage.backend", "sled")?
        .set_default("storage.path", "data/storykeeper.sled")?
        .set_default("assistant.provider", "gemini")?
        .set_default("assistant.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("assistant.api_key", std::env::var(API_KEY_ENV).unwrap_or_default())?
        .set_default("assistant.text_model", "gemini-3-flash-preview")?
        .set_default("assistant.image_model", "gemini-2.5-flash-image")?
        .set_default("assistant.timeout_secs", 60)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，层级分隔符为 __
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.storage.backend == StorageBackend::Sled && config.storage.path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty for the sled backend".to_string(),
        ));
    }

    if config.assistant.provider == AssistantProvider::Gemini && config.assistant.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Assistant base URL cannot be empty".to_string(),
        ));
    }

    if config.assistant.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Assistant timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== StoryKeeper Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Storage: {:?} ({})", config.storage.backend, config.storage.path);
    tracing::info!(
        "Assistant: {:?} (configured {:?})",
        config.assistant.effective_provider(),
        config.assistant.provider
    );
    if config.assistant.effective_provider() == AssistantProvider::Gemini {
        tracing::info!("Assistant URL: {}", config.assistant.base_url);
        tracing::info!("Text Model: {}", config.assistant.text_model);
        tracing::info!("Image Model: {}", config.assistant.image_model);
        tracing::info!("Assistant Timeout: {}s", config.assistant.timeout_secs);
    }
    tracing::info!("API Key: {}", config.assistant.masked_api_key());
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
