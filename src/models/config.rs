use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Root of a parsed global config document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    pub meta: Meta,
    pub pages: Pages,
}

/// Product identity. Not inspected by the validation rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub name: String,

    /// Namespace used for REST endpoint and handler names
    pub rest_root: String,

    pub version: String,

    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pages {
    /// Configuration tabs, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<Tab>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Inputs>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub name: String,
    pub title: String,

    pub entity: Vec<Entity>,

    /// Present when the tab manages a list of rows (e.g. accounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_name: Option<String>,
}

impl Tab {
    pub fn is_table(&self) -> bool {
        self.table.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<TableHeader>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableHeader {
    pub field: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub services: Vec<Service>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_level_menu: Option<Vec<MenuGroup>>,
}

/// A data input type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub title: String,

    pub entity: Vec<Entity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_handler_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_handler_module: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_handler_class: Option<String>,
}

/// One group of the inputs page multi-level menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub group_name: String,
    pub group_title: String,

    /// Services listed under this group. A group without it stands for a
    /// single service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_names: Option<Vec<String>>,
}

impl GlobalConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Configuration tabs, empty when the section is absent
    pub fn tabs(&self) -> &[Tab] {
        self.pages.configuration.as_deref().unwrap_or_default()
    }

    /// Declared services, empty when the inputs page is absent
    pub fn services(&self) -> &[Service] {
        self.pages
            .inputs
            .as_ref()
            .map(|inputs| inputs.services.as_slice())
            .unwrap_or_default()
    }

    pub fn multi_level_menu(&self) -> Option<&[MenuGroup]> {
        self.pages
            .inputs
            .as_ref()
            .and_then(|inputs| inputs.multi_level_menu.as_deref())
    }
}
