//! Conversions from `io::Result` into `ApplicationResult` with context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait attaching an action (and optionally a path) to I/O errors.
pub trait IoResultExt<T> {
    /// ```ignore
    /// renderer.render(&graph, title, &path)
    ///     .with_path_context("render tree", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.with_context(&format!("{}: {}", action, path.display()))
    }

    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}
