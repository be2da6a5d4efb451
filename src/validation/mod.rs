mod duplicates;
mod entity;
mod error;
mod error_reporter;
mod multilevel_menu;
mod rest_handler;
mod schemas;
mod validator;
mod validator_spec;

#[cfg(test)]
mod tests;

// Re-export the main validator and its error type
pub use duplicates::{DuplicateValidator, find_duplicates};
pub use entity::EntityValidator;
pub use error::ValidationError;
pub use error_reporter::{SchemaError, SpannedDocument};
pub use multilevel_menu::MultiLevelMenuValidator;
pub use rest_handler::RestHandlerValidator;
pub use schemas::{compile_global_config_schema, get_global_config_schema};
pub use validator::{GlobalConfigValidator, validate};
pub use validator_spec::check_validator;
