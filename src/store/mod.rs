//! Remote persistence for submitted results.
//!
//! The handler only knows about [`ResultStore`]; the GitHub contents API is
//! one implementation of it.

pub mod error;
pub mod github;

use std::future::Future;

use crate::models::commit::FileWrite;

pub use error::StoreError;
pub use github::GithubContents;

/// Writes one file per call.
pub trait ResultStore {
    /// Create or update `file.path` with `file.content`, committed with `file.message`.
    fn write_file(&self, file: FileWrite) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<S: ResultStore> ResultStore for &S {
    fn write_file(&self, file: FileWrite) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).write_file(file)
    }
}
