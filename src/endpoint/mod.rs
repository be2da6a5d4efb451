//! REST endpoint bindings derived from a validated global config
//!
//! Every configuration tab and input service ends up served by a REST
//! endpoint. This module resolves, for each of them, the endpoint name, the
//! conf file it writes to, the handler binding and the fields each entity
//! model exposes.

mod display;

use serde::Serialize;

use crate::models::{GlobalConfig, Service, Tab};

/// Name of the endpoint shared by all non-table configuration tabs
pub const SETTINGS_ENDPOINT: &str = "settings";

/// Field appended to entity models that can be switched off
pub const DISABLED_FIELD: &str = "disabled";

/// Which handler serves an endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RestHandlerBinding {
    /// A handler addressed by name, generated unless the author supplied one
    Named { name: String },
    /// An author-supplied handler class in a module
    Custom { module: String, class: String },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// One stanza per row of a configuration table
    SingleModel,
    /// One stanza per non-table configuration tab
    MultipleModel,
    /// One stanza per configured input
    DataInput,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EndpointEntity {
    pub name: String,
    pub fields: Vec<String>,

    /// Whether the model carries an extra `disabled` field. Decided when the
    /// entity is built from its owning tab or service.
    pub supports_disablement: bool,
}

impl EndpointEntity {
    fn new(name: &str, fields: Vec<String>, supports_disablement: bool) -> Self {
        Self {
            name: name.to_string(),
            fields,
            supports_disablement,
        }
    }

    /// Declared fields, followed by `disabled` when the model supports it
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        if self.supports_disablement {
            names.push(DISABLED_FIELD);
        }
        names
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RestEndpoint {
    /// `<restRoot>_<name>`
    pub name: String,
    pub kind: EndpointKind,
    pub conf_name: String,
    pub handler: RestHandlerBinding,
    pub entities: Vec<EndpointEntity>,
}

impl RestEndpoint {
    fn new(
        namespace: &str,
        name: &str,
        kind: EndpointKind,
        conf_name: Option<&str>,
        handler: RestHandlerBinding,
    ) -> Self {
        Self {
            name: format!("{namespace}_{name}"),
            kind,
            conf_name: conf_name
                .map(str::to_string)
                .unwrap_or_else(|| name.to_lowercase()),
            handler,
            entities: Vec::new(),
        }
    }
}

impl RestHandlerBinding {
    /// The generated handler name for an endpoint without an override
    pub fn default_for(namespace: &str, name: &str) -> Self {
        RestHandlerBinding::Named {
            name: format!("{namespace}_rh_{name}"),
        }
    }

    /// Binding declared by a service, or the generated default.
    ///
    /// Expects a service whose handler fields already passed validation.
    pub fn for_service(namespace: &str, service: &Service) -> Self {
        match (
            &service.rest_handler_name,
            &service.rest_handler_module,
            &service.rest_handler_class,
        ) {
            (Some(name), _, _) => RestHandlerBinding::Named { name: name.clone() },
            (None, Some(module), Some(class)) => RestHandlerBinding::Custom {
                module: module.clone(),
                class: class.clone(),
            },
            _ => Self::default_for(namespace, &service.name),
        }
    }
}

fn entity_fields(entities: &[crate::models::Entity]) -> Vec<String> {
    entities
        .iter()
        .flat_map(|entity| entity.fields())
        .map(|field| field.field.to_string())
        .collect()
}

fn table_endpoint(namespace: &str, tab: &Tab) -> RestEndpoint {
    let mut endpoint = RestEndpoint::new(
        namespace,
        &tab.name,
        EndpointKind::SingleModel,
        tab.conf_name.as_deref(),
        RestHandlerBinding::default_for(namespace, &tab.name),
    );
    // Rows of a table can only be switched off when they live in their own conf
    endpoint.entities.push(EndpointEntity::new(
        &tab.name,
        entity_fields(&tab.entity),
        tab.conf_name.is_some(),
    ));
    endpoint
}

fn service_endpoint(namespace: &str, service: &Service) -> RestEndpoint {
    let mut endpoint = RestEndpoint::new(
        namespace,
        &service.name,
        EndpointKind::DataInput,
        service.conf_name.as_deref(),
        RestHandlerBinding::for_service(namespace, service),
    );
    endpoint.entities.push(EndpointEntity::new(
        &service.name,
        entity_fields(&service.entity),
        true,
    ));
    endpoint
}

/// Resolve the REST endpoints of a validated config, in document order:
/// table tabs, the shared settings endpoint, then input services.
pub fn plan_endpoints(config: &GlobalConfig) -> Vec<RestEndpoint> {
    let namespace = config.meta.rest_root.as_str();
    let mut endpoints = Vec::new();
    let mut settings: Option<RestEndpoint> = None;

    for tab in config.tabs() {
        if tab.is_table() {
            endpoints.push(table_endpoint(namespace, tab));
            continue;
        }

        let settings = settings.get_or_insert_with(|| {
            RestEndpoint::new(
                namespace,
                SETTINGS_ENDPOINT,
                EndpointKind::MultipleModel,
                None,
                RestHandlerBinding::default_for(namespace, SETTINGS_ENDPOINT),
            )
        });
        settings
            .entities
            .push(EndpointEntity::new(&tab.name, entity_fields(&tab.entity), false));
    }

    endpoints.extend(settings);
    endpoints.extend(
        config
            .services()
            .iter()
            .map(|service| service_endpoint(namespace, service)),
    );

    tracing::debug!("Planned {} REST endpoints", endpoints.len());
    endpoints
}
