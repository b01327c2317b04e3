//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// One-line message for stderr, prefixed with the stable error category.
pub fn map_error(e: &ApiError) -> String {
    format!("{} error: {}", e.category(), e)
}
