use serde::{Deserialize, Serialize};
use std::fmt;

use super::validator::Validator;

/// One configurable field of a tab or service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub field: String,
    pub label: String,

    #[serde(rename = "type")]
    pub entity_type: EntityType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EntityOptions>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Text,
    Textarea,
    SingleSelect,
    MultipleSelect,
    Checkbox,
    CheckboxGroup,
    Radio,
    File,
    Oauth,
    Custom,
    HelpLink,
    Link,
    Interval,
    Index,
    Date,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_complete_fields: Option<Vec<AutoCompleteField>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_file_types: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_support_message: Option<String>,

    /// OAuth flow fields of an `oauth` entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<Vec<OAuthField>>,

    /// Basic-auth fields of an `oauth` entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<Vec<OAuthField>>,

    #[serde(rename = "auth_type", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<Vec<String>>,

    /// Options with no bearing on validation (endpointUrl, disableSearch, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Entry of `autoCompleteFields`. Entries with `children` are groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoCompleteField {
    pub value: AutoCompleteValue,
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AutoCompleteField>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AutoCompleteValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for AutoCompleteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoCompleteValue::Text(text) => f.write_str(text),
            AutoCompleteValue::Number(number) => write!(f, "{number}"),
            AutoCompleteValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Field nested under an `oauth` entity's `oauth` or `basic` options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthField {
    pub oauth_field: String,
    pub label: String,
    pub field: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

/// Borrowed view of anything that behaves like a field: a plain entity or
/// one of the sub-fields of an `oauth` entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRef<'a> {
    pub field: &'a str,
    pub label: &'a str,
    pub validators: &'a [Validator],
}

impl Entity {
    pub fn is_file(&self) -> bool {
        self.entity_type == EntityType::File
    }

    pub fn auto_complete_fields(&self) -> Option<&[AutoCompleteField]> {
        self.options
            .as_ref()
            .and_then(|options| options.auto_complete_fields.as_deref())
    }

    /// Fields this entity contributes to its tab or service.
    ///
    /// An `oauth` entity stands for the fields declared under its `oauth`
    /// and `basic` options rather than for itself.
    pub fn fields(&self) -> Vec<FieldRef<'_>> {
        if self.entity_type != EntityType::Oauth {
            return vec![FieldRef {
                field: &self.field,
                label: &self.label,
                validators: &self.validators,
            }];
        }

        let Some(options) = &self.options else {
            return Vec::new();
        };

        options
            .oauth
            .iter()
            .chain(options.basic.iter())
            .flatten()
            .map(|sub| FieldRef {
                field: &sub.field,
                label: &sub.label,
                validators: &sub.validators,
            })
            .collect()
    }
}
