use tracing::trace;

use super::error::ValidationError;
use super::validator_spec::check_validator;
use crate::models::Entity;

/// Structural checks on a single entity, plus its validators
pub struct EntityValidator;

impl EntityValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_entity(&self, entity: &Entity) -> Result<(), ValidationError> {
        trace!("Checking entity '{}'", entity.field);

        if entity.is_file() {
            self.validate_file_entity(entity)?;
        }

        for field in entity.fields() {
            for validator in field.validators {
                trace!("  {} validator on '{}'", validator.kind(), field.field);
                check_validator(field.field, validator)?;
            }
        }

        Ok(())
    }

    fn validate_file_entity(&self, entity: &Entity) -> Result<(), ValidationError> {
        let Some(options) = &entity.options else {
            return Err(ValidationError::structural(format!(
                "Options field for the file type should be present for '{}' field.",
                entity.field
            )));
        };

        if options.supported_file_types.is_none() {
            return Err(ValidationError::structural(format!(
                "You should define your supported file types in the `supportedFileTypes` \
                 field for the '{}' field.",
                entity.field
            )));
        }

        Ok(())
    }
}

impl Default for EntityValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: serde_json::Value) -> Entity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_file_entity_requires_options() {
        let file = entity(json!({
            "field": "service_account",
            "label": "Service account JSON",
            "type": "file"
        }));

        let err = EntityValidator::new().validate_entity(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Options field for the file type should be present for 'service_account' field."
        );
    }

    #[test]
    fn test_file_entity_requires_supported_file_types() {
        let file = entity(json!({
            "field": "service_account",
            "label": "Service account JSON",
            "type": "file",
            "options": { "maxFileSize": 500 }
        }));

        let err = EntityValidator::new().validate_entity(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You should define your supported file types in the `supportedFileTypes` \
             field for the 'service_account' field."
        );
    }

    #[test]
    fn test_complete_file_entity_passes() {
        let file = entity(json!({
            "field": "service_account",
            "label": "Service account JSON",
            "type": "file",
            "options": { "supportedFileTypes": ["json"], "maxFileSize": 500 }
        }));

        assert!(EntityValidator::new().validate_entity(&file).is_ok());
    }

    #[test]
    fn test_non_file_entity_without_options_passes() {
        let text = entity(json!({ "field": "name", "label": "Name", "type": "text" }));
        assert!(EntityValidator::new().validate_entity(&text).is_ok());
    }

    #[test]
    fn test_validators_checked_in_order() {
        let text = entity(json!({
            "field": "name",
            "label": "Name",
            "type": "text",
            "validators": [
                { "type": "regex", "pattern": "(" },
                { "type": "string", "minLength": 10, "maxLength": 5 }
            ]
        }));

        let err = EntityValidator::new().validate_entity(&text).unwrap_err();
        assert!(err.to_string().contains("incorrect regex validator"));
    }

    #[test]
    fn test_oauth_sub_field_validators_are_checked() {
        let oauth = entity(json!({
            "field": "oauth",
            "label": "OAuth",
            "type": "oauth",
            "options": {
                "oauth": [{
                    "oauth_field": "client_id",
                    "label": "Client Id",
                    "field": "client_id",
                    "validators": [{ "type": "number", "range": [5] }]
                }]
            }
        }));

        let err = EntityValidator::new().validate_entity(&oauth).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Entity 'client_id' has incorrect number validator, \
             it should have 2 elements under 'range' field."
        );
    }
}
