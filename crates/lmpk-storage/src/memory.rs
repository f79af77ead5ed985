use async_trait::async_trait;
use dashmap::DashMap;
use lmpk_core::error::{Result, StorageError};
use lmpk_core::record::RedirectRecord;
use lmpk_core::repository::{DeleteMatch, ReadRepository, Removed, Repository};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory storage entry for a redirect.
#[derive(Debug, Clone)]
struct Entry {
    link: String,
    /// Insertion order, so substring deletes pick the same record a file would.
    position: usize,
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// Records are keyed by name for O(1) lookups. Nothing is persisted; this
/// backend is meant for tests and throwaway deployments.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Entry>,
    next_position: AtomicUsize,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&self, record: RedirectRecord, position: usize) -> Result<()> {
        if self.storage.contains_key(&record.name) {
            return Err(StorageError::Operation(format!(
                "record already exists: {}",
                record.name
            )));
        }

        self.storage.insert(
            record.name,
            Entry {
                link: record.link,
                position,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, name: &str) -> Result<Option<RedirectRecord>> {
        Ok(self
            .storage
            .get(name)
            .map(|entry| RedirectRecord::new(name, entry.link.clone())))
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.storage.contains_key(name))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.storage.len())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, record: RedirectRecord) -> Result<()> {
        let position = self.next_position.fetch_add(1, Ordering::SeqCst);
        self.put(record, position)
    }

    async fn delete(&self, name: &str, mode: DeleteMatch) -> Result<Option<Removed>> {
        let target = self
            .storage
            .iter()
            .map(|item| {
                let line = RedirectRecord::new(item.key().as_str(), item.link.as_str()).to_line();
                (item.key().clone(), item.position, line)
            })
            .filter(|(_, _, line)| mode.matches(line, name))
            .min_by_key(|(_, position, _)| *position);

        let Some((key, position, line)) = target else {
            return Ok(None);
        };

        self.storage.remove(&key);
        Ok(Some(Removed { position, line }))
    }

    async fn restore(&self, removed: Removed) -> Result<()> {
        let record = removed.record().ok_or_else(|| {
            StorageError::InvalidData(format!("cannot restore line '{}'", removed.line))
        })?;
        self.put(record, removed.position)
    }
}
