use std::path::{Path, PathBuf};

use thiserror::Error;
use typed_builder::TypedBuilder;

pub const DEFAULT_LINK: &str = "https://lmpk.tk";
pub const DEFAULT_AUTH_KEY: &str = "AUTH";
pub const DEFAULT_TEMPLATE_PATH: &str = "index.html";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("auth token `{key}` not found in {path}")]
    MissingToken { key: String, path: PathBuf },
    #[error("auth token must not be empty")]
    EmptyToken,
}

/// Runtime settings shared by all request handlers.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewayConfig {
    /// Value the `Auth` header of management requests must equal.
    #[builder(setter(into))]
    pub auth_token: String,
    /// Redirect target for names that are not stored.
    #[builder(default = DEFAULT_LINK.to_string(), setter(into))]
    pub default_link: String,
    #[builder(default = PathBuf::from(DEFAULT_TEMPLATE_PATH), setter(into))]
    pub template_path: PathBuf,
    #[builder(default = PathBuf::from(DEFAULT_STATIC_DIR), setter(into))]
    pub static_dir: PathBuf,
}

/// Reads `key` from the dotenv-style file at `path`.
///
/// The process environment is left untouched. A missing file, a missing key
/// and an empty value are all startup errors.
pub fn load_auth_token(path: impl AsRef<Path>, key: &str) -> Result<String, ConfigError> {
    let path = path.as_ref();
    let env_file_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
        let (name, value) = item.map_err(env_file_error)?;
        if name == key {
            return validate_token(value);
        }
    }

    Err(ConfigError::MissingToken {
        key: key.to_string(),
        path: path.to_path_buf(),
    })
}

/// Rejects tokens that would let an empty `Auth` header through.
pub fn validate_token(token: String) -> Result<String, ConfigError> {
    if token.trim().is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    Ok(token)
}
