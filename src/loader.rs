//! Descriptor and schema loading.
//!
//! Handles fetching the descriptor document over HTTP and reading a
//! validation schema from a local file.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;

use crate::error::ImportError;

/// Default timeout for HTTP requests (10 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch a descriptor document from an HTTP/HTTPS URL and parse it as JSON.
///
/// # Errors
///
/// Returns `ImportError::Fetch` if the request fails or the server responds
/// with an error status, and `ImportError::Fetch` wrapping the decode error
/// if the body isn't valid JSON.
pub fn fetch_descriptor(url: &str) -> Result<Value, ImportError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| ImportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|source| ImportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| ImportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    response.json().map_err(|source| ImportError::Fetch {
        url: url.to_string(),
        source,
    })
}

/// Load a validation schema from a file path.
///
/// # Errors
///
/// Returns `ImportError::SchemaNotFound` if the file doesn't exist,
/// or `ImportError::InvalidJson` if the file isn't valid JSON.
pub fn load_schema(path: &Path) -> Result<Value, ImportError> {
    if !path.exists() {
        return Err(ImportError::SchemaNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ImportError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ImportError::InvalidJson { source })
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
