use crate::error::Result;
use crate::record::RedirectRecord;
use async_trait::async_trait;

/// How `delete` picks the line to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMatch {
    /// First line that contains the name anywhere, including inside another
    /// record's name or link. Compatible with existing deployments.
    #[default]
    Substring,
    /// First line whose name field equals the name.
    Exact,
}

impl DeleteMatch {
    /// Returns `true` if the stored `line` should be deleted for `name`.
    pub fn matches(&self, line: &str, name: &str) -> bool {
        match self {
            DeleteMatch::Substring => line.contains(name),
            DeleteMatch::Exact => {
                RedirectRecord::parse_line(line).is_some_and(|record| record.name == name)
            }
        }
    }
}

/// A line taken out of a repository, kept so it can be put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// Backend-specific position of the line, used to restore ordering.
    pub position: usize,
    /// The stored line, exactly as it was.
    pub line: String,
}

impl Removed {
    /// The record held by the removed line, if the line parses.
    pub fn record(&self) -> Option<RedirectRecord> {
        RedirectRecord::parse_line(&self.line)
    }
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the first record whose name equals `name`.
    /// Returns `None` if no such record exists.
    async fn get(&self, name: &str) -> Result<Option<RedirectRecord>>;

    /// Checks whether a record with this exact name exists.
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.get(name).await?.is_some())
    }

    /// Number of well-formed records.
    async fn count(&self) -> Result<usize>;
}

/// Mutating repository operations.
///
/// Implementations are not required to serialize calls against each other;
/// the redirect store holds its lock across every call sequence
/// (check-then-insert, delete-then-insert).
#[async_trait]
pub trait Repository: ReadRepository {
    /// Appends a record. Uniqueness is the caller's responsibility.
    async fn insert(&self, record: RedirectRecord) -> Result<()>;

    /// Removes the first line selected by `mode`.
    /// Returns the removed line, or `None` if nothing matched.
    async fn delete(&self, name: &str, mode: DeleteMatch) -> Result<Option<Removed>>;

    /// Puts a previously removed line back at its original position.
    async fn restore(&self, removed: Removed) -> Result<()>;
}
