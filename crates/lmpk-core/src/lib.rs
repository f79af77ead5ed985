//! Core types and traits for the lmpk redirect service.
//!
//! This crate provides the redirect record and its on-disk line format,
//! the name/link validator, the repository contracts implemented by
//! `lmpk-storage`, and the redirect store contract with its outcome types.

pub mod error;
pub mod outcome;
pub mod record;
pub mod repository;
pub mod store;
pub mod validator;

pub use error::{Result, StorageError};
pub use outcome::{CreateOutcome, DeleteOutcome, ModifyOutcome};
pub use record::RedirectRecord;
pub use repository::{DeleteMatch, ReadRepository, Removed, Repository};
pub use store::RedirectStore;
pub use validator::{Validation, Validator};
