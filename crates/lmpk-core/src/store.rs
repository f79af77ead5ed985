use crate::error::Result;
use crate::outcome::{CreateOutcome, DeleteOutcome, ModifyOutcome};
use async_trait::async_trait;

/// The redirect store contract served over HTTP.
///
/// Implementations serialize every call against the others: no caller can
/// observe the store between the steps of a create or a modify.
#[async_trait]
pub trait RedirectStore: Send + Sync + 'static {
    /// Resolves a name to its link.
    /// Returns `None` if no record exists or the name is blocked.
    async fn lookup(&self, name: &str) -> Result<Option<String>>;

    /// Stores a new record after the blocklist, uniqueness and pattern checks.
    async fn create(&self, name: &str, link: &str) -> Result<CreateOutcome>;

    /// Removes the record selected for `name`.
    async fn delete(&self, name: &str) -> Result<DeleteOutcome>;

    /// Replaces the link of `name`, restoring the old record if the new link
    /// is refused.
    async fn modify(&self, name: &str, link: &str) -> Result<ModifyOutcome>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize>;
}
