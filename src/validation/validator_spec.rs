//! Internal consistency of a single validator declaration

use fancy_regex::Regex;

use super::error::ValidationError;
use crate::models::Validator;

/// Check one validator of the entity whose `field` is `entity_field`
pub fn check_validator(entity_field: &str, validator: &Validator) -> Result<(), ValidationError> {
    match validator {
        Validator::String {
            min_length,
            max_length,
            ..
        } => check_string(entity_field, *min_length, *max_length),
        Validator::Number { range, .. } => check_number(entity_field, range),
        Validator::Regex { pattern, .. } => check_regex(entity_field, pattern),
        Validator::Email | Validator::Ipv4 | Validator::Date | Validator::Url | Validator::Other => {
            Ok(())
        }
    }
}

fn check_string(
    entity_field: &str,
    min_length: Option<i64>,
    max_length: Option<i64>,
) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (min_length, max_length) {
        if max < min {
            return Err(ValidationError::validator_spec(
                entity_field,
                format!(
                    "Entity '{entity_field}' has incorrect string validator, \
                     'maxLength' should be greater or equal than 'minLength'."
                ),
            ));
        }
    }
    Ok(())
}

fn check_number(entity_field: &str, range: &[f64]) -> Result<(), ValidationError> {
    let [lo, hi] = range else {
        return Err(ValidationError::validator_spec(
            entity_field,
            format!(
                "Entity '{entity_field}' has incorrect number validator, \
                 it should have 2 elements under 'range' field."
            ),
        ));
    };

    if hi < lo {
        return Err(ValidationError::validator_spec(
            entity_field,
            format!(
                "Entity '{entity_field}' has incorrect number validator, \
                 second element should be greater or equal than first element."
            ),
        ));
    }
    Ok(())
}

fn check_regex(entity_field: &str, pattern: &str) -> Result<(), ValidationError> {
    if Regex::new(pattern).is_err() {
        return Err(ValidationError::validator_spec(
            entity_field,
            format!(
                "Entity '{entity_field}' has incorrect regex validator, \
                 pattern provided in the 'pattern' field is not compilable."
            ),
        ));
    }
    Ok(())
}
