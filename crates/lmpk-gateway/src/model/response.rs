use lmpk_core::{CreateOutcome, DeleteOutcome, ModifyOutcome};
use serde::Serialize;

/// Body of every management response.
///
/// Codes are grouped by hundreds: `1xx` success, `2xx` request and lookup
/// problems, `4xx` create refusals, `5xx` modify failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseCode {
    pub code: u16,
    pub status: &'static str,
}

impl ResponseCode {
    const fn new(code: u16, status: &'static str) -> Self {
        Self { code, status }
    }

    pub const OK: Self = Self::new(100, "Done");
    pub const NO_AUTH: Self = Self::new(200, "No Auth header provided");
    pub const WRONG_AUTH: Self = Self::new(201, "Wrong Auth header");
    pub const NAME_NOT_FOUND: Self = Self::new(204, "Name not found");
    pub const NAME_BLOCKED: Self = Self::new(205, "Name is blocked");
    pub const STORAGE_UNAVAILABLE: Self = Self::new(206, "Storage unavailable");
    pub const NO_NAME: Self = Self::new(211, "No name provided");
    pub const NO_LINK: Self = Self::new(212, "No link provided");
    pub const NAME_WRONG: Self = Self::new(
        401,
        "Name is not compliant with the pattern. Name pattern: ^[a-zA-Z0-9_.-]*$",
    );
    pub const LINK_WRONG: Self = Self::new(
        402,
        "Link is not compliant with the pattern. Link pattern (only https): (https://)([0-9a-z.-]+)\\.([a-z]{2,6})([/A-Za-z0-9_.-]*)/?",
    );
    pub const NAME_LINK_WRONG: Self = Self::new(
        403,
        "Name and link are not compliant with the pattern. Name pattern: ^[a-zA-Z0-9_.-]*$, Link pattern (only https): (https://)([0-9a-z.-]+)\\.([a-z]{2,6})([/A-Za-z0-9_.-]*)/?",
    );
    pub const ALREADY_EXIST: Self = Self::new(405, "Name already exist");
    pub const ROLLBACK_FAILED: Self = Self::new(
        501,
        "Modification failed and the previous link could not be restored",
    );
}

impl From<CreateOutcome> for ResponseCode {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created => ResponseCode::OK,
            CreateOutcome::Blocked => ResponseCode::NAME_BLOCKED,
            CreateOutcome::AlreadyExists => ResponseCode::ALREADY_EXIST,
            CreateOutcome::NameInvalid => ResponseCode::NAME_WRONG,
            CreateOutcome::LinkInvalid => ResponseCode::LINK_WRONG,
            CreateOutcome::NameAndLinkInvalid => ResponseCode::NAME_LINK_WRONG,
        }
    }
}

impl From<DeleteOutcome> for ResponseCode {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted => ResponseCode::OK,
            DeleteOutcome::NotFound => ResponseCode::NAME_NOT_FOUND,
        }
    }
}

impl From<&ModifyOutcome> for ResponseCode {
    fn from(outcome: &ModifyOutcome) -> Self {
        match outcome {
            ModifyOutcome::Modified => ResponseCode::OK,
            ModifyOutcome::NotFound => ResponseCode::NAME_NOT_FOUND,
            ModifyOutcome::Rejected(rejected) => (*rejected).into(),
            ModifyOutcome::RollbackFailed { .. } => ResponseCode::ROLLBACK_FAILED,
        }
    }
}
