//! Top-level import pipeline.
//!
//! Linear run-to-completion flow: fetch the descriptor, validate it when a
//! schema was supplied, map it into a CKAN package dictionary, and submit.
//! The first error at any stage aborts the whole run.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::ImportError;
use crate::loader::{fetch_descriptor, load_schema};
use crate::mapper::{descriptor_resource, extras_entries, package_metadata, resource_entries};
use crate::resolver::resolve_resource_urls;
use crate::submitter::submit;
use crate::validator::validate_descriptor;

/// Options controlling one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Path to a JSON Schema to validate the descriptor against.
    pub schema: Option<PathBuf>,
    /// Base URL of the CKAN instance to upload to.
    pub host: String,
    /// CKAN user API key of the uploader.
    pub apikey: Option<String>,
    /// CKAN organisation the dataset should belong to.
    pub organization: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            schema: None,
            host: "localhost".to_string(),
            apikey: None,
            organization: None,
        }
    }
}

/// Assemble the full CKAN package dictionary from a fetched descriptor.
///
/// Runs the three field mappers, resolves relative resource URLs against
/// the descriptor URL, appends the synthetic descriptor resource, and
/// merges everything into one dictionary. `owner_org` is set only when an
/// organization was supplied.
///
/// # Errors
///
/// Returns `ImportError::InvalidUrl` if resource URL resolution fails.
pub fn build_package(
    descriptor: &Value,
    descriptor_url: &str,
    organization: Option<&str>,
) -> Result<Value, ImportError> {
    let mut package = package_metadata(descriptor);
    if let Some(organization) = organization {
        package.insert("owner_org".to_string(), Value::String(organization.to_string()));
    }

    // Paths must be turned into urls because we don't support file uploads
    let mut resources = resource_entries(descriptor);
    resolve_resource_urls(&mut resources, descriptor_url)?;

    // The descriptor file itself is always linked as the last resource
    resources.push(descriptor_resource(descriptor_url));

    // Creating the resources together with the package limits us to linking
    // (hence the url fix above); uploads would need one call per resource.
    package.insert(
        "resources".to_string(),
        Value::Array(resources.into_iter().map(Value::Object).collect()),
    );
    package.insert(
        "extras".to_string(),
        Value::Array(extras_entries(descriptor)),
    );

    Ok(Value::Object(package))
}

/// Import a budget data package into CKAN.
///
/// Returns the submission status code and raw response body on success.
///
/// # Errors
///
/// Propagates fetch, validation, and URL errors unchanged; any non-200
/// submission response becomes `ImportError::Rejected` carrying the
/// response body verbatim.
pub fn import(descriptor_url: &str, options: &ImportOptions) -> Result<(u16, String), ImportError> {
    debug!(url = descriptor_url, "fetching descriptor");
    let descriptor = fetch_descriptor(descriptor_url)?;

    if let Some(schema_path) = &options.schema {
        debug!(schema = %schema_path.display(), "validating descriptor");
        let schema = load_schema(schema_path)?;
        validate_descriptor(&descriptor, &schema)?;
    }

    let package = build_package(&descriptor, descriptor_url, options.organization.as_deref())?;

    debug!(host = %options.host, "submitting package");
    let (status, body) = submit(&options.host, options.apikey.as_deref(), &package)?;

    if status != 200 {
        return Err(ImportError::Rejected { status, body });
    }

    info!(url = descriptor_url, "package imported");
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_package_full_descriptor() {
        let descriptor = json!({
            "name": "budget-2024",
            "title": "National Budget 2024",
            "homepage": "https://budget.example.org",
            "countryCode": "IS",
            "resources": [
                { "name": "expenditure", "path": "resources/r1.csv" }
            ]
        });

        let package =
            build_package(&descriptor, "http://example.com/data/pkg.json", None).unwrap();

        assert_eq!(package["name"], "budget-2024");
        assert_eq!(package["url"], "https://budget.example.org");

        let resources = package["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["url"], "http://example.com/data/resources/r1.csv");
        assert_eq!(resources[1]["name"], "Data package");
        assert_eq!(resources[1]["url"], "http://example.com/data/pkg.json");

        let extras = package["extras"].as_array().unwrap();
        assert_eq!(extras.len(), 1);
        assert_eq!(extras[0]["key"], "countryCode");
    }

    #[test]
    fn build_package_owner_org_only_when_supplied() {
        let descriptor = json!({ "name": "budget-2024" });

        let package = build_package(
            &descriptor,
            "http://example.com/pkg.json",
            Some("ministry-of-finance"),
        )
        .unwrap();
        assert_eq!(package["owner_org"], "ministry-of-finance");

        let package = build_package(&descriptor, "http://example.com/pkg.json", None).unwrap();
        assert!(package.get("owner_org").is_none());
    }

    #[test]
    fn build_package_synthetic_resource_always_last_and_unresolved() {
        let descriptor = json!({
            "resources": [
                { "name": "expenditure", "url": "https://elsewhere.org/r2.csv" }
            ]
        });

        let package =
            build_package(&descriptor, "http://example.com/data/pkg.json", None).unwrap();
        let resources = package["resources"].as_array().unwrap();

        assert_eq!(resources.len(), 2);
        let last = resources.last().unwrap();
        assert_eq!(last["name"], "Data package");
        assert_eq!(
            last["description"],
            "The descriptor file for the data package"
        );
        assert_eq!(last["url"], "http://example.com/data/pkg.json");
    }

    #[test]
    fn build_package_empty_descriptor() {
        let package = build_package(&json!({}), "http://example.com/pkg.json", None).unwrap();

        // Only the synthetic resource and an empty extras list appear
        assert_eq!(package["resources"].as_array().unwrap().len(), 1);
        assert!(package["extras"].as_array().unwrap().is_empty());
        assert!(package.get("name").is_none());
    }

    #[test]
    fn default_options_target_localhost() {
        let options = ImportOptions::default();
        assert_eq!(options.host, "localhost");
        assert!(options.schema.is_none());
        assert!(options.apikey.is_none());
        assert!(options.organization.is_none());
    }
}
