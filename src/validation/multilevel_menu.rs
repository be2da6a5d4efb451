use std::collections::HashSet;

use super::duplicates::DuplicateValidator;
use super::error::ValidationError;
use crate::models::{MenuGroup, Service};

/// Referential integrity between the inputs multi-level menu and the
/// declared services
pub struct MultiLevelMenuValidator<'a> {
    service_names: HashSet<&'a str>,
    service_titles: HashSet<&'a str>,
}

impl<'a> MultiLevelMenuValidator<'a> {
    pub fn new(services: &'a [Service]) -> Self {
        Self {
            service_names: services.iter().map(|s| s.name.as_str()).collect(),
            service_titles: services.iter().map(|s| s.title.as_str()).collect(),
        }
    }

    pub fn validate_menu(&self, groups: &[MenuGroup]) -> Result<(), ValidationError> {
        for group in groups {
            self.validate_group(group)?;
        }

        DuplicateValidator::new().validate_menu_groups(groups)
    }

    fn validate_group(&self, group: &MenuGroup) -> Result<(), ValidationError> {
        if let Some(service_names) = &group.service_names {
            for service_name in service_names {
                if !self.service_names.contains(service_name.as_str()) {
                    return Err(ValidationError::cross_reference(
                        service_name,
                        format!(
                            "{service_name} ServiceName in the multi-level menu does not \
                             match any services name."
                        ),
                    ));
                }
            }
            return Ok(());
        }

        // A group without services is a direct entry for one service
        if !self.service_names.contains(group.group_name.as_str())
            || !self.service_titles.contains(group.group_title.as_str())
        {
            return Err(ValidationError::cross_reference(
                &group.group_name,
                format!(
                    "{} groupName or {} groupTitle in the multi-level menu does not match \
                     any services name or title.",
                    group.group_name, group.group_title
                ),
            ));
        }

        Ok(())
    }
}
