use miette::Diagnostic;
use thiserror::Error;

/// The first rule violation found in a global config.
///
/// `Display` yields the message alone; downstream tooling matches on it
/// verbatim.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required piece of structure is missing
    #[error("{message}")]
    #[diagnostic(code(global_config::structural_omission))]
    StructuralOmission { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(global_config::invalid_validator_spec),
        help("string lengths, number ranges and regex patterns must be consistent")
    )]
    InvalidValidatorSpec { entity: String, message: String },

    /// Name or label collision inside one collection. `duplicates` lists
    /// every colliding key in first-seen order.
    #[error("{message}")]
    #[diagnostic(code(global_config::duplicate_key))]
    DuplicateKey {
        message: String,
        duplicates: Vec<String>,
    },

    #[error("{message}")]
    #[diagnostic(
        code(global_config::rest_handler_binding_conflict),
        help("declare either 'restHandlerName' alone, or 'restHandlerModule' together with 'restHandlerClass'")
    )]
    RestHandlerBindingConflict { service: String, message: String },

    #[error("{message}")]
    #[diagnostic(code(global_config::cross_reference))]
    CrossReference { element: String, message: String },
}

impl ValidationError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        ValidationError::StructuralOmission {
            message: message.into(),
        }
    }

    pub(crate) fn validator_spec(entity: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValidatorSpec {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn duplicates(message: impl Into<String>, duplicates: Vec<String>) -> Self {
        ValidationError::DuplicateKey {
            message: message.into(),
            duplicates,
        }
    }

    pub(crate) fn rest_handler(service: &str, message: impl Into<String>) -> Self {
        ValidationError::RestHandlerBindingConflict {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn cross_reference(element: &str, message: impl Into<String>) -> Self {
        ValidationError::CrossReference {
            element: element.to_string(),
            message: message.into(),
        }
    }
}
