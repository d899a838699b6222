//! Sled 存储

mod key_value_store;

pub use key_value_store::{SledKeyValueStore, SledStoreConfig};
