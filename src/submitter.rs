//! Package submission to a CKAN instance.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::ImportError;

/// CKAN action API endpoint for creating a package with its resources.
const PACKAGE_CREATE_PATH: &str = "/api/action/package_create";

/// Default timeout for HTTP requests (10 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Submit an assembled package dictionary to a CKAN host.
///
/// Resolves the fixed `package_create` action path against the host,
/// attaches the API key as the `Authorization` header when supplied, and
/// issues one synchronous POST with the package as the JSON body.
///
/// Returns the response status code and raw body text; judging the status
/// is left to the caller.
///
/// # Errors
///
/// Returns `ImportError::InvalidUrl` if the host is not a valid base URL,
/// or `ImportError::Submit` if the request itself fails.
pub fn submit(host: &str, apikey: Option<&str>, package: &Value) -> Result<(u16, String), ImportError> {
    let endpoint = Url::parse(host)
        .and_then(|base| base.join(PACKAGE_CREATE_PATH))
        .map_err(|source| ImportError::InvalidUrl {
            url: host.to_string(),
            source,
        })?;

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| ImportError::Submit {
            url: endpoint.to_string(),
            source,
        })?;

    let mut request = client.post(endpoint.as_str()).json(package);
    if let Some(apikey) = apikey {
        request = request.header("Authorization", apikey);
    }

    let response = request.send().map_err(|source| ImportError::Submit {
        url: endpoint.to_string(),
        source,
    })?;

    let status = response.status().as_u16();
    let body = response.text().map_err(|source| ImportError::Submit {
        url: endpoint.to_string(),
        source,
    })?;

    Ok((status, body))
}
