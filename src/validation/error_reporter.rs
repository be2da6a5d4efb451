use miette::{Diagnostic, NamedSource, SourceSpan};
use std::collections::HashMap;
use std::path::Path;
use yaml_spanned::{Spanned, Value as YamlValue, from_str};

#[derive(Debug, Clone)]
pub struct SpanInfo {
    pub start: usize,
    pub end: usize,
}

/// A schema violation located in the source document
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(global_config::schema))]
pub struct SchemaError {
    #[source_code]
    pub source_code: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    pub message: String,
}

/// A parsed document plus the byte span of every JSON pointer in it
pub struct SpannedDocument {
    spans: HashMap<String, SpanInfo>,
    json_value: serde_json::Value,
    source: String,
    file_path: String,
}

impl SpannedDocument {
    /// Parse YAML (or JSON, which the YAML parser also accepts) keeping spans
    pub fn parse(file_path: &Path, source: String) -> Result<Self, Box<dyn std::error::Error>> {
        let spanned_yaml: Spanned<YamlValue> = from_str(&source)?;

        let mut spans = HashMap::new();
        let json_value = Self::strip_spans_and_index(&spanned_yaml, String::new(), &mut spans);

        Ok(Self {
            spans,
            json_value,
            source,
            file_path: file_path.display().to_string(),
        })
    }

    /// Wrap an already parsed value. Errors will point at the start of the
    /// file.
    pub fn without_spans(file_path: &Path, source: String, json_value: serde_json::Value) -> Self {
        Self {
            spans: HashMap::new(),
            json_value,
            source,
            file_path: file_path.display().to_string(),
        }
    }

    pub fn get_json_value(&self) -> &serde_json::Value {
        &self.json_value
    }

    pub fn into_json_value(self) -> serde_json::Value {
        self.json_value
    }

    pub fn create_error(&self, instance_path: &str, message: String) -> SchemaError {
        // Look up span info, default to start of file if not found
        let span_info = self
            .spans
            .get(instance_path)
            .or_else(|| self.spans.get(""))
            .cloned()
            .unwrap_or(SpanInfo { start: 0, end: 0 });

        SchemaError {
            source_code: crate::error_utils::create_named_source(
                Path::new(&self.file_path),
                self.source.clone(),
            ),
            span: SourceSpan::new(
                span_info.start.into(),
                span_info.end.saturating_sub(span_info.start),
            ),
            message,
        }
    }

    fn strip_spans_and_index(
        node: &Spanned<YamlValue>,
        pointer: String,
        spans: &mut HashMap<String, SpanInfo>,
    ) -> serde_json::Value {
        let span = node.span();
        let start = span.start.unwrap_or_default().byte_index;
        let end = span.end.unwrap_or_default().byte_index;

        let value = match node.as_ref() {
            YamlValue::Null => serde_json::Value::Null,
            YamlValue::Bool(flag) => (*flag).into(),
            YamlValue::Number(number) => yaml_number(number),
            YamlValue::String(text) => text.as_str().into(),
            YamlValue::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Self::strip_spans_and_index(item, format!("{pointer}/{index}"), spans)
                })
                .collect(),
            YamlValue::Mapping(entries) => entries
                .iter()
                .filter_map(|(key, item)| match key.as_ref() {
                    YamlValue::String(key) => {
                        let child = format!("{pointer}/{}", escape_pointer_token(key));
                        Some((key.clone(), Self::strip_spans_and_index(item, child, spans)))
                    }
                    // Non-string keys have no JSON counterpart
                    _ => None,
                })
                .collect::<serde_json::Map<_, _>>()
                .into(),
            YamlValue::Tagged(tagged) => {
                return Self::strip_spans_and_index(&tagged.value, pointer, spans);
            }
        };

        spans.insert(pointer, SpanInfo { start, end });
        value
    }
}

fn yaml_number(number: &yaml_spanned::Number) -> serde_json::Value {
    number
        .as_i64()
        .map(serde_json::Value::from)
        .or_else(|| number.as_u64().map(serde_json::Value::from))
        .or_else(|| {
            number
                .as_f64()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
        })
        .unwrap_or(serde_json::Value::Null)
}

/// RFC 6901 escaping, matching the instance paths jsonschema reports
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
