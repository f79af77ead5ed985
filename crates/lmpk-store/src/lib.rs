//! Redirect store service.
//!
//! This crate wraps any [`Repository`](lmpk_core::Repository) in a single
//! serialization boundary and implements the
//! [`RedirectStore`](lmpk_core::RedirectStore) contract on top of it.

pub mod service;

pub use service::{StoreService, StoreSettings};
