pub mod config;
pub mod entity;
pub mod validator;

// Re-export commonly used types
pub use config::{GlobalConfig, Inputs, MenuGroup, Meta, Pages, Service, Tab, Table, TableHeader};
pub use entity::{
    AutoCompleteField, AutoCompleteValue, Entity, EntityOptions, EntityType, FieldRef, OAuthField,
};
pub use validator::Validator;
