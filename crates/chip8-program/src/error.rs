//! Compilation diagnostics as reported by a backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A compilation error reported by a backend.
///
/// Line and column are **0-based**, exactly as the frontend counts them.
/// Presentation layers add 1 before showing them to a user; the session
/// layer does this in its composed error message and in
/// `error_line()`/`error_col()`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{text} at {line}:{col}")]
pub struct CompileError {
    /// Human-readable message text.
    pub text: String,
    /// 0-based source line of the first error.
    pub line: u32,
    /// 0-based column of the first error.
    pub col: u32,
}

impl CompileError {
    /// Create a new error at a 0-based source position.
    pub fn new(text: impl Into<String>, line: u32, col: u32) -> Self {
        Self {
            text: text.into(),
            line,
            col,
        }
    }
}
