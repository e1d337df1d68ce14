/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

use thiserror::Error;

/// Failures at the mapper's input boundary.
///
/// Missing `options` or `multilingual-options` keys are not errors; the
/// resolution chain falls through them. Only malformed input shape is
/// rejected, and rejected fast.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("{0} parse error: {1}")]
    Parse(String, String),

    #[error("field '{identifier}' has invalid settings: {reason}")]
    InvalidFieldSettings { identifier: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;
