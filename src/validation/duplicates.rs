//! Name and label uniqueness inside each collection of the document

use std::collections::HashMap;
use std::hash::Hash;

use super::error::ValidationError;
use crate::models::{AutoCompleteField, Entity, MenuGroup, Service, Tab};

/// Every key that occurs more than once, ordered by its first occurrence
pub fn find_duplicates<'a, T, K, F>(items: &'a [T], key: F) -> Vec<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a T) -> K,
{
    let mut seen: HashMap<K, (usize, usize)> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        seen.entry(key(item)).or_insert((index, 0)).1 += 1;
    }

    let mut duplicates: Vec<(usize, K)> = seen
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(key, (first_seen, _))| (first_seen, key))
        .collect();
    duplicates.sort_by_key(|(first_seen, _)| *first_seen);
    duplicates.into_iter().map(|(_, key)| key).collect()
}

/// Duplicates on either member of a `(name, title)` style pair
fn find_pair_duplicates<'a, T>(
    items: &'a [T],
    left: impl Fn(&'a T) -> &'a str,
    right: impl Fn(&'a T) -> &'a str,
) -> Vec<String> {
    find_duplicates(items, left)
        .into_iter()
        .chain(find_duplicates(items, right))
        .map(str::to_string)
        .collect()
}

fn ensure_unique(duplicates: Vec<String>, message: impl Into<String>) -> Result<(), ValidationError> {
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::duplicates(message, duplicates))
    }
}

pub struct DuplicateValidator;

impl DuplicateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_tabs(&self, tabs: &[Tab]) -> Result<(), ValidationError> {
        ensure_unique(
            find_pair_duplicates(tabs, |tab| tab.name.as_str(), |tab| tab.title.as_str()),
            "Duplicates found for tabs names or titles",
        )
    }

    pub fn validate_services(&self, services: &[Service]) -> Result<(), ValidationError> {
        ensure_unique(
            find_pair_duplicates(
                services,
                |service| service.name.as_str(),
                |service| service.title.as_str(),
            ),
            "Duplicates found for inputs (services) names or titles",
        )
    }

    /// Fields and labels of one tab or service, oauth sub-fields included,
    /// then the autoCompleteFields of each entity in document order.
    pub fn validate_entities(&self, entities: &[Entity]) -> Result<(), ValidationError> {
        let fields: Vec<_> = entities.iter().flat_map(Entity::fields).collect();
        ensure_unique(
            find_pair_duplicates(&fields, |f| f.field, |f| f.label),
            "Duplicates found for entity field or label",
        )?;

        for entity in entities {
            if let Some(auto_complete) = entity.auto_complete_fields() {
                self.validate_auto_complete_fields(&entity.label, auto_complete)?;
            }
        }

        Ok(())
    }

    /// Once any entry is a group, labels must be unique across the whole
    /// list, and so must the values and labels of each group's children.
    /// Without any group the whole list is checked as a single set of
    /// children.
    pub fn validate_auto_complete_fields(
        &self,
        entity_label: &str,
        fields: &[AutoCompleteField],
    ) -> Result<(), ValidationError> {
        let groups: Vec<&[AutoCompleteField]> = fields
            .iter()
            .filter_map(|field| field.children.as_deref())
            .collect();

        if groups.is_empty() {
            return self.validate_auto_complete_children(entity_label, fields);
        }

        for children in groups {
            self.validate_auto_complete_children(entity_label, children)?;
        }

        // Group labels share one namespace with the flat entries beside them
        ensure_unique(
            find_duplicates(fields, |field| field.label.as_str())
                .into_iter()
                .map(str::to_string)
                .collect(),
            format!("Duplicates found for autoCompleteFields: '{entity_label}'"),
        )
    }

    fn validate_auto_complete_children(
        &self,
        entity_label: &str,
        children: &[AutoCompleteField],
    ) -> Result<(), ValidationError> {
        let values: Vec<String> = children.iter().map(|child| child.value.to_string()).collect();
        let duplicates = find_duplicates(&values, String::clone)
            .into_iter()
            .chain(
                find_duplicates(children, |child| child.label.as_str())
                    .into_iter()
                    .map(str::to_string),
            )
            .collect();

        ensure_unique(
            duplicates,
            format!("Duplicates found for autoCompleteFields children in entity '{entity_label}'"),
        )
    }

    pub fn validate_menu_groups(&self, groups: &[MenuGroup]) -> Result<(), ValidationError> {
        ensure_unique(
            find_pair_duplicates(
                groups,
                |group| group.group_name.as_str(),
                |group| group.group_title.as_str(),
            ),
            "Duplicates found for multi-level menu groups' names or titles.",
        )
    }
}

impl Default for DuplicateValidator {
    fn default() -> Self {
        Self::new()
    }
}
