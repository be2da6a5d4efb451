use serde::{Deserialize, Serialize};

/// A constraint attached to an entity, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Validator {
    #[serde(rename_all = "camelCase")]
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<i64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<i64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        error_msg: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    Number {
        /// Expected to hold exactly `[lo, hi]`
        range: Vec<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        error_msg: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    Regex {
        pattern: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        error_msg: Option<String>,
    },

    Email,
    Ipv4,
    Date,
    Url,

    /// Any validator type without parameters worth checking
    #[serde(other)]
    Other,
}

impl Validator {
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::String { .. } => "string",
            Validator::Number { .. } => "number",
            Validator::Regex { .. } => "regex",
            Validator::Email => "email",
            Validator::Ipv4 => "ipv4",
            Validator::Date => "date",
            Validator::Url => "url",
            Validator::Other => "other",
        }
    }
}
