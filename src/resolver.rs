//! Resource URL resolution.
//!
//! Descriptor resources may carry relative paths. CKAN only links to
//! resources (no file uploads here), so every relative path is turned into
//! an absolute URL against the descriptor's own location.

use serde_json::{json, Map, Value};
use url::Url;

use crate::error::ImportError;
use crate::loader::is_url;

/// Rewrite relative resource URLs as absolute ones.
///
/// Every entry whose `url` does not start with `http://` or `https://` is
/// resolved against the descriptor URL using standard base+relative
/// resolution. Already-absolute entries and entries without a `url` are left
/// untouched.
///
/// # Errors
///
/// Returns `ImportError::InvalidUrl` if the descriptor URL is not a valid
/// base or a relative reference cannot be resolved against it.
pub fn resolve_resource_urls(
    resources: &mut [Map<String, Value>],
    descriptor_url: &str,
) -> Result<(), ImportError> {
    let base = Url::parse(descriptor_url).map_err(|source| ImportError::InvalidUrl {
        url: descriptor_url.to_string(),
        source,
    })?;

    for entry in resources.iter_mut() {
        let relative = match entry.get("url").and_then(Value::as_str) {
            Some(value) if !is_url(value) => value.to_string(),
            _ => continue,
        };

        let resolved = base
            .join(&relative)
            .map_err(|source| ImportError::InvalidUrl {
                url: relative.clone(),
                source,
            })?;
        entry.insert("url".to_string(), json!(resolved.as_str()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("url".to_string(), json!(url));
        map
    }

    #[test]
    fn relative_path_resolves_against_descriptor_directory() {
        let mut resources = vec![entry("resources/r1.csv")];
        resolve_resource_urls(&mut resources, "http://example.com/data/pkg.json").unwrap();

        assert_eq!(resources[0]["url"], "http://example.com/data/resources/r1.csv");
    }

    #[test]
    fn absolute_path_replaces_base_path() {
        let mut resources = vec![entry("/other/r1.csv")];
        resolve_resource_urls(&mut resources, "http://example.com/data/pkg.json").unwrap();

        assert_eq!(resources[0]["url"], "http://example.com/other/r1.csv");
    }

    #[test]
    fn absolute_http_url_left_untouched() {
        let mut resources = vec![entry("https://elsewhere.org/r2.csv")];
        resolve_resource_urls(&mut resources, "http://example.com/data/pkg.json").unwrap();

        assert_eq!(resources[0]["url"], "https://elsewhere.org/r2.csv");
    }

    #[test]
    fn entry_without_url_left_untouched() {
        let mut map = Map::new();
        map.insert("name".to_string(), json!("expenditure"));
        let mut resources = vec![map];

        resolve_resource_urls(&mut resources, "http://example.com/data/pkg.json").unwrap();
        assert!(!resources[0].contains_key("url"));
    }

    #[test]
    fn mixed_entries_resolved_independently() {
        let mut resources = vec![
            entry("r1.csv"),
            entry("http://elsewhere.org/r2.csv"),
            entry("sub/r3.csv"),
        ];
        resolve_resource_urls(&mut resources, "https://example.com/data/pkg.json").unwrap();

        assert_eq!(resources[0]["url"], "https://example.com/data/r1.csv");
        assert_eq!(resources[1]["url"], "http://elsewhere.org/r2.csv");
        assert_eq!(resources[2]["url"], "https://example.com/data/sub/r3.csv");
    }

    #[test]
    fn invalid_base_url_rejected() {
        let mut resources = vec![entry("r1.csv")];
        let result = resolve_resource_urls(&mut resources, "not-a-url");
        assert!(matches!(result, Err(ImportError::InvalidUrl { .. })));
    }
}
