use async_trait::async_trait;
use lmpk_core::{
    CreateOutcome, DeleteMatch, DeleteOutcome, ModifyOutcome, RedirectRecord, RedirectStore,
    Removed, Repository, StorageError, Validator,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, trace, warn};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, StorageError>;

/// Configures a [`StoreService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreSettings {
    /// Patterns and reserved names every record is checked against.
    #[builder(default)]
    pub validator: Validator,
    /// How `delete` (and the delete step of `modify`) selects its line.
    #[builder(default)]
    pub delete_match: DeleteMatch,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the [`RedirectStore`] trait.
///
/// The repository sits behind a single `RwLock`. Lookups and counts share
/// the read side; create, delete and modify hold the write side for their
/// whole read-modify-write cycle, so two requests can never interleave their
/// reads and writes of the backing file.
#[derive(Debug)]
pub struct StoreService<R> {
    repository: RwLock<R>,
    settings: StoreSettings,
}

impl<R: Repository> StoreService<R> {
    pub fn new(repository: R, settings: StoreSettings) -> Self {
        Self {
            repository: RwLock::new(repository),
            settings,
        }
    }

    /// Creates a service with the default blocklist and substring deletes.
    pub fn with_defaults(repository: R) -> Self {
        Self::new(repository, StoreSettings::default())
    }

    /// Check order: blocklist, existence, name pattern, link pattern.
    /// The first failing check decides the outcome.
    async fn create_locked(&self, repo: &R, name: &str, link: &str) -> Result<CreateOutcome> {
        let validator = &self.settings.validator;

        if validator.is_blocked(name) {
            debug!(name = %name, "create refused, name is blocked");
            return Ok(CreateOutcome::Blocked);
        }

        if repo.exists(name).await? {
            debug!(name = %name, "create refused, name already exists");
            return Ok(CreateOutcome::AlreadyExists);
        }

        if let Some(outcome) = CreateOutcome::from_validation(validator.validate(name, link)) {
            debug!(name = %name, link = %link, ?outcome, "create refused by validator");
            return Ok(outcome);
        }

        repo.insert(RedirectRecord::new(name, link)).await?;
        info!(name = %name, link = %link, "created redirect");
        Ok(CreateOutcome::Created)
    }

    async fn delete_locked(&self, repo: &R, name: &str) -> Result<Option<Removed>> {
        // an empty needle is a substring of every line
        if name.is_empty() {
            return Ok(None);
        }
        repo.delete(name, self.settings.delete_match).await
    }
}

#[async_trait]
impl<R: Repository> RedirectStore for StoreService<R> {
    async fn lookup(&self, name: &str) -> Result<Option<String>> {
        if self.settings.validator.is_blocked(name) {
            trace!(name = %name, "lookup of blocked name");
            return Ok(None);
        }

        let repo = self.repository.read().await;
        let link = repo.get(name).await?.map(|record| record.link);

        trace!(name = %name, found = link.is_some(), "lookup");
        Ok(link)
    }

    async fn create(&self, name: &str, link: &str) -> Result<CreateOutcome> {
        let repo = self.repository.write().await;
        self.create_locked(&repo, name, link).await
    }

    async fn delete(&self, name: &str) -> Result<DeleteOutcome> {
        let repo = self.repository.write().await;

        match self.delete_locked(&repo, name).await? {
            Some(removed) => {
                info!(name = %name, line = %removed.line, "deleted redirect");
                Ok(DeleteOutcome::Deleted)
            }
            None => {
                debug!(name = %name, "delete found nothing");
                Ok(DeleteOutcome::NotFound)
            }
        }
    }

    async fn modify(&self, name: &str, link: &str) -> Result<ModifyOutcome> {
        let repo = self.repository.write().await;

        let previous = repo.get(name).await?.map(|record| record.link);
        trace!(name = %name, previous = ?previous, "modify fetched old link");

        let Some(removed) = self.delete_locked(&repo, name).await? else {
            debug!(name = %name, "modify found nothing to replace");
            return Ok(ModifyOutcome::NotFound);
        };

        let outcome = match self.create_locked(&repo, name, link).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if let Err(restore_err) = repo.restore(removed).await {
                    error!(
                        name = %name,
                        error = %restore_err,
                        "failed to restore record after storage error"
                    );
                }
                return Err(err);
            }
        };

        if outcome.is_created() {
            info!(name = %name, previous = ?previous, link = %link, "modified redirect");
            return Ok(ModifyOutcome::Modified);
        }

        match repo.restore(removed).await {
            Ok(()) => {
                debug!(name = %name, ?outcome, "modify refused, previous record restored");
                Ok(ModifyOutcome::Rejected(outcome))
            }
            Err(error) => {
                warn!(
                    name = %name,
                    ?outcome,
                    error = %error,
                    "modify refused and previous record could not be restored"
                );
                Ok(ModifyOutcome::RollbackFailed {
                    rejected: outcome,
                    error,
                })
            }
        }
    }

    async fn count(&self) -> Result<usize> {
        self.repository.read().await.count().await
    }
}
