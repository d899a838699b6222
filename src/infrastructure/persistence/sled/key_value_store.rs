//! Sled-based Key-Value Store Implementation
//!
//! 值以 JSON 字节保存，和浏览器 localStorage 中的文档形状一致

use async_trait::async_trait;
use serde_json::Value;
use sled::{Db, Tree};
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{KeyValueStorePort, StoreError};

/// 所有 key 所在的 tree
const TREE_NAME: &str = "storykeeper";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/storykeeper.sled".to_string(),
        }
    }
}

/// Sled Key-Value Store
pub struct SledKeyValueStore {
    db: Db,
    tree: Tree,
}

impl SledKeyValueStore {
    /// 打开（或创建）数据库
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path).map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        let tree = db
            .open_tree(TREE_NAME)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            keys = tree.len(),
            "SledKeyValueStore initialized"
        );

        Ok(Self { db, tree })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl KeyValueStorePort for SledKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match self.tree.get(key) {
            Ok(Some(bytes)) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::SerializationError(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    async fn store(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&value).map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let size_bytes = bytes.len();

        self.tree
            .insert(key, bytes)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(key = %key, size_bytes = size_bytes, "Value stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.tree
            .remove(key)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush_async()
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_load_remove() {
        let dir = tempdir().unwrap();
        let store = SledKeyValueStore::open(dir.path().join("test.sled")).unwrap();

        assert!(store.load("sk_stories").await.unwrap().is_none());

        let stories = json!([{"id": "s1", "title": "The Blue Bicycle"}]);
        store.store("sk_stories", stories.clone()).await.unwrap();
        assert_eq!(store.load("sk_stories").await.unwrap(), Some(stories));

        store.remove("sk_stories").await.unwrap();
        assert!(store.load("sk_stories").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        {
            let store = SledKeyValueStore::open(&path).unwrap();
            store.store("sk_book_size", json!("square")).await.unwrap();
            store.flush().await.unwrap();
        }

        let store = SledKeyValueStore::open(&path).unwrap();
        assert_eq!(store.load("sk_book_size").await.unwrap(), Some(json!("square")));
    }

    #[tokio::test]
    async fn test_corrupt_bytes_are_reported() {
        let dir = tempdir().unwrap();
        let store = SledKeyValueStore::open(dir.path().join("test.sled")).unwrap();
        store.tree.insert("sk_user", &b"{not json"[..]).unwrap();

        let result = store.load("sk_user").await;
        assert!(matches!(result, Err(StoreError::SerializationError(_))));
    }
}
