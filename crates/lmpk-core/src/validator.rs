use regex::Regex;
use std::sync::LazyLock;

/// Names a record may contain. Full-string match.
pub const NAME_PATTERN: &str = r"^[a-zA-Z0-9_.-]*$";

/// Shape of an accepted link: `https://`, lowercase host labels, a 2-6 letter
/// TLD and an optional path. Matched anywhere in the link.
pub const LINK_PATTERN: &str = r"(https://)([0-9a-z.-]+)\.([a-z]{2,6})([/A-Za-z0-9_.-]*)/?";

/// Reserved names that can never be created or resolved.
pub const DEFAULT_BLOCKLIST: &[&str] = &[
    "admin",
    "lempek",
    "lk",
    "lmpk",
    "create_redirect",
    "delete_redirect",
    "modify_redirect",
    "get",
];

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"));

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("link pattern is a valid regex"));

/// Result of checking a name and a link against their patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    NameInvalid,
    LinkInvalid,
    BothInvalid,
}

impl Validation {
    fn from_checks(name_ok: bool, link_ok: bool) -> Self {
        match (name_ok, link_ok) {
            (true, true) => Validation::Valid,
            (false, true) => Validation::NameInvalid,
            (true, false) => Validation::LinkInvalid,
            (false, false) => Validation::BothInvalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Checks names and links before they reach the store.
///
/// The blocklist is owned by the validator so that it can be injected at
/// construction instead of living in a process-wide variable.
#[derive(Debug, Clone)]
pub struct Validator {
    blocklist: Vec<String>,
}

impl Validator {
    /// Creates a validator with the default reserved names.
    pub fn new() -> Self {
        Self::with_blocklist(DEFAULT_BLOCKLIST.iter().copied())
    }

    /// Creates a validator with a custom set of reserved names.
    pub fn with_blocklist<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocklist: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `name` is reserved. Case-sensitive.
    pub fn is_blocked(&self, name: &str) -> bool {
        self.blocklist.iter().any(|blocked| blocked == name)
    }

    /// Checks the name and the link independently and combines the results.
    ///
    /// Both checks always run so the combined outcome names every failing
    /// field. The blocklist is not consulted here.
    pub fn validate(&self, name: &str, link: &str) -> Validation {
        Validation::from_checks(Self::name_ok(name), Self::link_ok(link))
    }

    fn name_ok(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    fn link_ok(link: &str) -> bool {
        // a raw line break or separator would split the stored line
        if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }
        LINK_REGEX.is_match(link)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
