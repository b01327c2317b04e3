//! CLI input: JSON request documents from a file or stdin.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Read and decode a JSON request. A path of `-` reads stdin.
pub fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to read stdin: {}", e)))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to read {}: {}", path.display(), e))
        })?
    };
    parse_input(&raw)
}

fn parse_input<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw)
        .map_err(|e| ApiError::InvalidRequest(format!("Request is not valid JSON: {}", e)))
}
