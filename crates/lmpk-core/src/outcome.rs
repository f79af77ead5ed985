use crate::error::StorageError;
use crate::validator::Validation;

/// Result of a create request that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Blocked,
    AlreadyExists,
    NameInvalid,
    LinkInvalid,
    NameAndLinkInvalid,
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created)
    }

    /// Maps a failed validation to its outcome. `None` when validation passed.
    pub fn from_validation(validation: Validation) -> Option<Self> {
        match validation {
            Validation::Valid => None,
            Validation::NameInvalid => Some(CreateOutcome::NameInvalid),
            Validation::LinkInvalid => Some(CreateOutcome::LinkInvalid),
            Validation::BothInvalid => Some(CreateOutcome::NameAndLinkInvalid),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Result of replacing a record's link.
#[derive(Debug, Clone)]
pub enum ModifyOutcome {
    /// The new link was stored.
    Modified,
    /// Nothing matched the name, the store is unchanged.
    NotFound,
    /// The new link was refused and the previous record was put back.
    Rejected(CreateOutcome),
    /// The new link was refused and putting the previous record back failed.
    RollbackFailed {
        rejected: CreateOutcome,
        error: StorageError,
    },
}
