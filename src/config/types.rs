//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// AI 协作者配置
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 磁盘上的 sled 数据库
    #[default]
    Sled,
    /// 进程内存，重启即丢失
    Memory,
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// sled 数据库目录
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    "data/storykeeper.sled".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// AI 协作者实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantProvider {
    #[default]
    Gemini,
    /// 离线确定性实现
    Fake,
}

/// AI 协作者配置
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub provider: AssistantProvider,

    /// Gemini API 基础 URL
    #[serde(default = "default_assistant_url")]
    pub base_url: String,

    /// 为空时回退到离线实现
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_assistant_timeout")]
    pub timeout_secs: u64,
}

fn default_assistant_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_assistant_timeout() -> u64 {
    60
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: AssistantProvider::default(),
            base_url: default_assistant_url(),
            api_key: String::new(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_assistant_timeout(),
        }
    }
}

impl AssistantConfig {
    /// 实际生效的实现：没有 API key 时使用离线实现
    pub fn effective_provider(&self) -> AssistantProvider {
        match self.provider {
            AssistantProvider::Gemini if self.api_key.trim().is_empty() => AssistantProvider::Fake,
            provider => provider,
        }
    }

    /// 用于日志的脱敏 key
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        match key.chars().count() {
            0 => "<unset>".to_string(),
            n if n <= 8 => "****".to_string(),
            n => format!("****{}", key.chars().skip(n - 4).collect::<String>()),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（EnvFilter 语法）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.storage.backend, StorageBackend::Sled);
        assert_eq!(config.assistant.provider, AssistantProvider::Gemini);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_api_key_falls_back_to_fake() {
        let mut config = AssistantConfig::default();
        assert_eq!(config.effective_provider(), AssistantProvider::Fake);

        config.api_key = "AIzaSyExampleKey1234".to_string();
        assert_eq!(config.effective_provider(), AssistantProvider::Gemini);
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = AssistantConfig::default();
        assert_eq!(config.masked_api_key(), "<unset>");

        config.api_key = "short".to_string();
        assert_eq!(config.masked_api_key(), "****");

        config.api_key = "AIzaSyExampleKey1234".to_string();
        assert_eq!(config.masked_api_key(), "****1234");
    }
}
