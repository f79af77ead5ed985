//! Repository backends for the lmpk redirect store.

pub mod file;
pub mod memory;

pub use file::FlatFileRepository;
pub use lmpk_core::error::{Result, StorageError};
pub use lmpk_core::repository::{DeleteMatch, ReadRepository, Removed, Repository};
pub use memory::InMemoryRepository;
