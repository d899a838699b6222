//! Memory Layer - In-Memory State
//!
//! 进程内的 KeyValueStore 实现，用于 `storage.backend = "memory"` 和测试

mod key_value_store;

pub use key_value_store::InMemoryKeyValueStore;
