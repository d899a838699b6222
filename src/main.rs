//! StoryKeeper - 回忆录书籍服务
//!
//! 启动流程：配置 -> 日志 -> 存储 -> 会话 -> AI 协作者 -> HTTP

use std::sync::Arc;

use storykeeper::application::{
    IllustratorPort, KeyValueStorePort, PromptGeneratorPort, SessionRepository, SessionState,
    StoryAssistant, TextRefinerPort,
};
use storykeeper::config::{
    load_config, print_config, AppConfig, AssistantProvider, LogConfig, StorageBackend,
};
use storykeeper::infrastructure::adapters::{FakeAssistantClient, GeminiClient, GeminiClientConfig};
use storykeeper::infrastructure::http::{AppState, HttpServer, ServerConfig};
use storykeeper::infrastructure::memory::InMemoryKeyValueStore;
use storykeeper::infrastructure::persistence::sled::{SledKeyValueStore, SledStoreConfig};

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},storykeeper={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStorePort>> {
    match config.storage.backend {
        StorageBackend::Sled => {
            if let Some(parent) = std::path::Path::new(&config.storage.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let store_config = SledStoreConfig {
                db_path: config.storage.path.clone(),
            };
            Ok(Arc::new(SledKeyValueStore::new(&store_config)?))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, stories will be lost on exit");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
    }
}

fn build_assistant(config: &AppConfig) -> anyhow::Result<StoryAssistant> {
    let assistant = &config.assistant;
    match assistant.effective_provider() {
        AssistantProvider::Gemini => {
            let client = Arc::new(GeminiClient::new(GeminiClientConfig {
                base_url: assistant.base_url.clone(),
                api_key: assistant.api_key.clone(),
                text_model: assistant.text_model.clone(),
                image_model: assistant.image_model.clone(),
                timeout_secs: assistant.timeout_secs,
            })?);
            Ok(ports_from(client))
        }
        AssistantProvider::Fake => {
            if assistant.provider == AssistantProvider::Gemini {
                tracing::warn!("No Gemini API key configured, using offline assistant");
            }
            Ok(ports_from(Arc::new(FakeAssistantClient::new())))
        }
    }
}

fn ports_from<C>(client: Arc<C>) -> StoryAssistant
where
    C: TextRefinerPort + PromptGeneratorPort + IllustratorPort + 'static,
{
    StoryAssistant::new(client.clone(), client.clone(), client)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("StoryKeeper v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 存储与会话：启动时读取一次
    let store = open_store(&config).await?;
    let repository = SessionRepository::new(store.clone());
    let session = repository.load().await?;
    repository.save_all(&session).await?;
    let session = Arc::new(SessionState::new(session));

    let assistant = Arc::new(build_assistant(&config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(session, store, assistant);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
