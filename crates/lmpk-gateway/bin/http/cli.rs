use clap::{Parser, ValueEnum};
use lmpk_core::DeleteMatch;
use lmpk_gateway::config::{
    DEFAULT_AUTH_KEY, DEFAULT_LINK, DEFAULT_STATIC_DIR, DEFAULT_TEMPLATE_PATH,
};
use lmpk_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "LMPK_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "LMPK_GATEWAY_STORAGE_BACKEND";
pub const REDIRECTS_FILE_ENV: &str = "LMPK_GATEWAY_REDIRECTS_FILE";
pub const DELETE_MATCH_ENV: &str = "LMPK_GATEWAY_DELETE_MATCH";
pub const DEFAULT_LINK_ENV: &str = "LMPK_GATEWAY_DEFAULT_LINK";
pub const ENV_FILE_ENV: &str = "LMPK_GATEWAY_ENV_FILE";
pub const AUTH_KEY_ENV: &str = "LMPK_GATEWAY_AUTH_KEY";
pub const AUTH_TOKEN_ENV: &str = "LMPK_GATEWAY_AUTH_TOKEN";
pub const TEMPLATE_PATH_ENV: &str = "LMPK_GATEWAY_TEMPLATE_PATH";
pub const STATIC_DIR_ENV: &str = "LMPK_GATEWAY_STATIC_DIR";
pub const LOG_FORMAT_ENV: &str = "LMPK_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIRECTS_FILE: &str = "redirects.txt";
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "file")]
    File,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::File => write!(f, "file"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeleteMatchArg {
    #[value(name = "substring")]
    Substring,
    #[value(name = "exact")]
    Exact,
}

impl Display for DeleteMatchArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteMatchArg::Substring => write!(f, "substring"),
            DeleteMatchArg::Exact => write!(f, "exact"),
        }
    }
}

impl From<DeleteMatchArg> for DeleteMatch {
    fn from(arg: DeleteMatchArg) -> Self {
        match arg {
            DeleteMatchArg::Substring => DeleteMatch::Substring,
            DeleteMatchArg::Exact => DeleteMatch::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lmpk-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::File
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIRECTS_FILE_ENV, default_value = DEFAULT_REDIRECTS_FILE)]
    pub redirects_file: PathBuf,

    #[arg(
        long,
        env = DELETE_MATCH_ENV,
        value_enum,
        default_value_t = DeleteMatchArg::Substring
    )]
    pub delete_match: DeleteMatchArg,

    #[arg(long, env = DEFAULT_LINK_ENV, default_value = DEFAULT_LINK)]
    pub default_link: String,

    #[arg(long, env = ENV_FILE_ENV, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    #[arg(long, env = AUTH_KEY_ENV, default_value = DEFAULT_AUTH_KEY)]
    pub auth_key: String,

    /// Takes precedence over the env file when set.
    #[arg(long, env = AUTH_TOKEN_ENV, hide_env_values = true)]
    pub auth_token: Option<String>,

    #[arg(long, env = TEMPLATE_PATH_ENV, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template_path: PathBuf,

    #[arg(long, env = STATIC_DIR_ENV, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
