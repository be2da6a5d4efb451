use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde_json::Value;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

// Embed schemas at compile time
const GLOBAL_CONFIG_SCHEMA: &str = include_str!("../../schemas/v1/global-config-schema.json");

/// The global config schema, parsed once
pub static GLOBAL_CONFIG_SCHEMA_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(GLOBAL_CONFIG_SCHEMA)
        .expect("Failed to parse embedded global config schema - this is a bug")
});

pub fn get_global_config_schema() -> &'static Value {
    &GLOBAL_CONFIG_SCHEMA_VALUE
}

/// Compile the embedded global config schema
pub fn compile_global_config_schema() -> Result<jsonschema::Validator> {
    schema_draft::options()
        .build(get_global_config_schema())
        .context("Failed to compile global config schema")
}
