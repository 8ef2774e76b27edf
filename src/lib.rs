//! Budget Data Package → CKAN importer
//!
//! Fetches a budget data package descriptor from a URL, optionally validates
//! it against a JSON Schema, translates its metadata into a CKAN package
//! dictionary, and submits it via the CKAN action API.
//!
//! # Example
//!
//! ```no_run
//! use bdp2ckan::{import, ImportOptions};
//!
//! let options = ImportOptions {
//!     host: "https://data.example.org".to_string(),
//!     apikey: Some("my-api-key".to_string()),
//!     ..Default::default()
//! };
//!
//! let (status, body) = import("http://example.com/data/pkg.json", &options)?;
//! assert_eq!(status, 200);
//! # Ok::<(), bdp2ckan::ImportError>(())
//! ```
//!
//! # Field Mapping
//!
//! Descriptor fields are copied only when present; absent source fields
//! never produce target keys. Three mappers run independently:
//!
//! | Output | Source | Notes |
//! |--------|--------|-------|
//! | package metadata | `name, title, homepage, version, license, description` | six fixed pairs |
//! | `resources` | per-resource fields | `title` overrides `name`, `url` overrides `path` |
//! | `extras` | `granularity, direction, status, countryCode` | keyed by *source* field name |
//!
//! Relative resource paths are resolved against the descriptor URL, and a
//! synthetic resource pointing at the descriptor itself is always appended
//! last.

mod error;
mod importer;
mod loader;
mod logging;
mod mapper;
mod resolver;
mod submitter;
mod validator;

pub use error::{ImportError, SchemaError};
pub use importer::{build_package, import, ImportOptions};
pub use loader::{fetch_descriptor, is_url, load_schema};
pub use logging::init_cli_logger;
pub use mapper::{
    descriptor_resource, extras_entries, package_metadata, resource_entries, EXTRAS_MAPPING,
    PACKAGE_MAPPING, RESOURCE_MAPPING,
};
pub use resolver::resolve_resource_urls;
pub use submitter::submit;
pub use validator::validate_descriptor;
