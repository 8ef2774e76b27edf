//! Field mapping from a budget data package descriptor to CKAN metadata.
//!
//! Each mapper is a pure function driven by a `(ckan, dpkg)` pair table:
//! a value is copied only when the source field is present, so absent source
//! fields never produce keys in the output. Pair order is significant where
//! noted.

use serde_json::{json, Map, Value};

/// Mapping between package metadata keys of CKAN and the data package.
///
/// This does not handle licenses (multiple licenses in the data package)
/// because CKAN does not support it.
pub const PACKAGE_MAPPING: &[(&str, &str)] = &[
    ("name", "name"),
    ("title", "title"),
    ("url", "homepage"),
    ("version", "version"),
    ("license_id", "license"),
    ("notes", "description"),
];

/// Mapping between resource metadata keys of CKAN and the data package.
///
/// Later pairs override earlier ones when both source keys exist:
/// `name` can be overwritten by `title`, and `path` by `url`.
pub const RESOURCE_MAPPING: &[(&str, &str)] = &[
    ("name", "name"),
    ("name", "title"),
    ("description", "description"),
    ("format", "format"),
    ("mimetype", "mediatype"),
    ("size", "bytes"),
    ("hash", "hash"),
    ("url", "path"),
    ("url", "url"),
];

/// Mapping between CKAN extras keys and budget data package metadata.
///
/// These keys must be accepted by the target CKAN instance's schema.
pub const EXTRAS_MAPPING: &[(&str, &str)] = &[
    ("granularity", "granularity"),
    ("direction", "direction"),
    ("status", "status"),
    ("country", "countryCode"),
];

/// Extract package-level CKAN metadata from the descriptor.
///
/// Produces zero or more of the six `PACKAGE_MAPPING` target keys; values
/// pass through unchanged.
pub fn package_metadata(descriptor: &Value) -> Map<String, Value> {
    let mut data = Map::new();
    for (ckan, dpkg) in PACKAGE_MAPPING {
        if let Some(value) = descriptor.get(dpkg) {
            data.insert((*ckan).to_string(), value.clone());
        }
    }
    data
}

/// Build one CKAN resource entry per descriptor resource, in input order.
///
/// An absent or empty `resources` field yields an empty list. Pair order in
/// `RESOURCE_MAPPING` decides which source field wins when two map to the
/// same target key.
pub fn resource_entries(descriptor: &Value) -> Vec<Map<String, Value>> {
    let resources = match descriptor.get("resources").and_then(Value::as_array) {
        Some(resources) => resources,
        None => return Vec::new(),
    };

    resources
        .iter()
        .map(|resource| {
            let mut entry = Map::new();
            for (ckan, dpkg) in RESOURCE_MAPPING {
                if let Some(value) = resource.get(dpkg) {
                    entry.insert((*ckan).to_string(), value.clone());
                }
            }
            entry
        })
        .collect()
}

/// Extract budget-specific metadata as CKAN extras entries.
///
/// Each entry stores the *source* field name as its `key` (so `countryCode`
/// stays `countryCode`, not `country`). Entry order follows
/// `EXTRAS_MAPPING`, not the descriptor.
pub fn extras_entries(descriptor: &Value) -> Vec<Value> {
    let mut extras = Vec::new();
    for (_ckan, dpkg) in EXTRAS_MAPPING {
        if let Some(value) = descriptor.get(dpkg) {
            extras.push(json!({ "key": dpkg, "value": value }));
        }
    }
    extras
}

/// Build the synthetic resource entry pointing at the descriptor itself.
///
/// Appended as the last resource of every package, with the original
/// (unresolved) descriptor URL.
pub fn descriptor_resource(descriptor_url: &str) -> Map<String, Value> {
    let mut entry = Map::new();
    entry.insert("name".to_string(), json!("Data package"));
    entry.insert(
        "description".to_string(),
        json!("The descriptor file for the data package"),
    );
    entry.insert("url".to_string(), json!(descriptor_url));
    entry
}
