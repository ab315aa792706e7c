//! Adapters implementing the domain ports.

pub mod file_log;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
