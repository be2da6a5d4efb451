use tracing::{debug, info};

use super::duplicates::DuplicateValidator;
use super::entity::EntityValidator;
use super::error::ValidationError;
use super::multilevel_menu::MultiLevelMenuValidator;
use super::rest_handler::RestHandlerValidator;
use crate::models::{Entity, GlobalConfig, Service, Tab};

/// Runs every semantic rule over a parsed global config.
///
/// Rules run in a fixed order and the first violation ends the run:
/// configuration tabs, tab duplicates, input services, service duplicates,
/// REST handler bindings, then the multi-level menu.
pub struct GlobalConfigValidator {
    entity_validator: EntityValidator,
    duplicate_validator: DuplicateValidator,
    rest_handler_validator: RestHandlerValidator,
}

impl GlobalConfigValidator {
    pub fn new() -> Self {
        Self {
            entity_validator: EntityValidator::new(),
            duplicate_validator: DuplicateValidator::new(),
            rest_handler_validator: RestHandlerValidator::new(),
        }
    }

    pub fn validate(&self, config: &GlobalConfig) -> Result<(), ValidationError> {
        if let Some(tabs) = &config.pages.configuration {
            debug!("Validating {} configuration tabs...", tabs.len());
            self.validate_tabs(tabs)?;
            self.duplicate_validator.validate_tabs(tabs)?;
        }

        if let Some(inputs) = &config.pages.inputs {
            let services = &inputs.services;
            debug!("Validating {} input services...", services.len());
            self.validate_services(services)?;
            self.duplicate_validator.validate_services(services)?;

            debug!("Validating REST handler bindings...");
            for service in services {
                self.rest_handler_validator.validate_service(service)?;
            }

            if let Some(menu) = &inputs.multi_level_menu {
                debug!("Validating multi-level menu ({} groups)...", menu.len());
                MultiLevelMenuValidator::new(services).validate_menu(menu)?;
            }
        }

        info!("✓ Global config validation passed");
        Ok(())
    }

    fn validate_tabs(&self, tabs: &[Tab]) -> Result<(), ValidationError> {
        if tabs.is_empty() {
            return Err(ValidationError::structural("[] is too short"));
        }

        for tab in tabs {
            debug!("  Validating tab '{}'", tab.name);
            // Applies to settings tabs as well as tables
            if !tab.entity.iter().any(|entity| entity.field == "name") {
                return Err(ValidationError::structural(format!(
                    "Tab '{}' should have entity with field 'name'",
                    tab.name
                )));
            }
            self.validate_entities(&tab.entity)?;
        }

        Ok(())
    }

    fn validate_services(&self, services: &[Service]) -> Result<(), ValidationError> {
        for service in services {
            debug!("  Validating input '{}'", service.name);
            self.validate_entities(&service.entity)?;
        }
        Ok(())
    }

    fn validate_entities(&self, entities: &[Entity]) -> Result<(), ValidationError> {
        for entity in entities {
            self.entity_validator.validate_entity(entity)?;
        }
        self.duplicate_validator.validate_entities(entities)
    }
}

impl Default for GlobalConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a parsed global config, returning the first violation found
pub fn validate(config: &GlobalConfig) -> Result<(), ValidationError> {
    GlobalConfigValidator::new().validate(config)
}
