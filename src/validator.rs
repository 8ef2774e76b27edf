//! Descriptor validation against a caller-supplied JSON Schema.

use serde_json::Value;

use crate::error::{ImportError, SchemaError};

/// Validate a descriptor against a JSON Schema.
///
/// Collects every violation rather than stopping at the first one.
///
/// # Errors
///
/// Returns `ImportError::InvalidSchema` if the schema itself can't be
/// compiled, or `ImportError::SchemaViolation` if the descriptor doesn't
/// match the schema.
pub fn validate_descriptor(descriptor: &Value, schema: &Value) -> Result<(), ImportError> {
    let validator = jsonschema::validator_for(schema).map_err(|e| ImportError::InvalidSchema {
        message: e.to_string(),
    })?;

    let errors: Vec<SchemaError> = validator
        .iter_errors(descriptor)
        .map(|e| SchemaError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ImportError::SchemaViolation { errors })
    }
}
