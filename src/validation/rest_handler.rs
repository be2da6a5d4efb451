use super::error::ValidationError;
use crate::models::Service;

/// Checks that a service binds its REST handler in one of the two legal
/// ways: `restHandlerName` alone, or `restHandlerModule` with
/// `restHandlerClass`. Declaring none of them is also legal.
pub struct RestHandlerValidator;

impl RestHandlerValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_service(&self, service: &Service) -> Result<(), ValidationError> {
        let has_name = service.rest_handler_name.is_some();
        let has_module = service.rest_handler_module.is_some();
        let has_class = service.rest_handler_class.is_some();

        if has_name && (has_module || has_class) {
            return Err(ValidationError::rest_handler(
                &service.name,
                format!(
                    "Input '{}' has both 'restHandlerName' and 'restHandlerModule' or \
                     'restHandlerClass' fields present. Please use only 'restHandlerName' \
                     or 'restHandlerModule' and 'restHandlerClass'.",
                    service.name
                ),
            ));
        }

        if has_module != has_class {
            return Err(ValidationError::rest_handler(
                &service.name,
                format!(
                    "Input '{}' should have both 'restHandlerModule' and 'restHandlerClass' \
                     fields present, only 1 of them was found.",
                    service.name
                ),
            ));
        }

        Ok(())
    }
}

impl Default for RestHandlerValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH_MESSAGE: &str = "Input 'example_input_one' has both 'restHandlerName' and \
        'restHandlerModule' or 'restHandlerClass' fields present. Please use only \
        'restHandlerName' or 'restHandlerModule' and 'restHandlerClass'.";

    const ONLY_ONE_MESSAGE: &str = "Input 'example_input_one' should have both \
        'restHandlerModule' and 'restHandlerClass' fields present, only 1 of them was found.";

    fn service(name: Option<&str>, module: Option<&str>, class: Option<&str>) -> Service {
        Service {
            name: "example_input_one".to_string(),
            title: "Example Input One".to_string(),
            entity: Vec::new(),
            conf_name: None,
            rest_handler_name: name.map(str::to_string),
            rest_handler_module: module.map(str::to_string),
            rest_handler_class: class.map(str::to_string),
        }
    }

    #[test]
    fn test_legal_bindings() {
        let validator = RestHandlerValidator::new();
        assert!(validator.validate_service(&service(None, None, None)).is_ok());
        assert!(
            validator
                .validate_service(&service(Some("rh_example"), None, None))
                .is_ok()
        );
        assert!(
            validator
                .validate_service(&service(None, Some("rh_module"), Some("RhClass")))
                .is_ok()
        );
    }

    #[test]
    fn test_name_with_module_or_class() {
        let validator = RestHandlerValidator::new();
        for svc in [
            service(Some("rh"), Some("rh_module"), None),
            service(Some("rh"), None, Some("RhClass")),
            service(Some("rh"), Some("rh_module"), Some("RhClass")),
        ] {
            let err = validator.validate_service(&svc).unwrap_err();
            assert_eq!(err.to_string(), BOTH_MESSAGE);
        }
    }

    #[test]
    fn test_module_without_class() {
        let validator = RestHandlerValidator::new();
        for svc in [
            service(None, Some("rh_module"), None),
            service(None, None, Some("RhClass")),
        ] {
            let err = validator.validate_service(&svc).unwrap_err();
            assert_eq!(err.to_string(), ONLY_ONE_MESSAGE);
            assert!(matches!(
                err,
                ValidationError::RestHandlerBindingConflict { ref service, .. }
                    if service == "example_input_one"
            ));
        }
    }
}
