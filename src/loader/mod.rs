//! Reads a global config file, runs the schema pass and builds the model

use anyhow::{Context, Result};
use miette::Report;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::GlobalConfig;
use crate::validation::{SpannedDocument, compile_global_config_schema};

/// Serialization of a global config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => anyhow::bail!(
                "Cannot tell the format of {}: expected a .json, .yaml or .yml file \
                 (use --format to set it explicitly)",
                path.display()
            ),
        }
    }
}

pub struct GlobalConfigLoader {
    path: PathBuf,
    format: ConfigFormat,
}

impl GlobalConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: ConfigFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, check it against the schema and build the model.
    ///
    /// Semantic rules are not applied here; see
    /// [`crate::validation::validate`].
    pub fn load(&self) -> Result<GlobalConfig> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read global config: {}", self.path.display()))?;
        Self::load_str(&content, self.format, &self.path)
    }

    /// Same as [`GlobalConfigLoader::load`] for content already in memory.
    /// `source_path` is only used in error messages.
    pub fn load_str(content: &str, format: ConfigFormat, source_path: &Path) -> Result<GlobalConfig> {
        let document = Self::parse(content, format, source_path)?;

        debug!("Running schema validation for {}", source_path.display());
        let validator = compile_global_config_schema()?;
        let errors: Vec<_> = validator.iter_errors(document.get_json_value()).collect();

        if !errors.is_empty() {
            eprintln!(); // Add newline before first error
            for error in &errors {
                let schema_error =
                    document.create_error(&error.instance_path.to_string(), error.to_string());
                eprintln!("{:?}", Report::new(schema_error));
            }
            anyhow::bail!(
                "Schema validation failed for {} (see detailed errors above)",
                source_path.display()
            );
        }
        info!("✓ Schema validation passed: {}", source_path.display());

        let config: GlobalConfig = serde_json::from_value(document.into_json_value())
            .with_context(|| {
                format!("Failed to build global config from {}", source_path.display())
            })?;
        Ok(config)
    }

    fn parse(content: &str, format: ConfigFormat, source_path: &Path) -> Result<SpannedDocument> {
        match SpannedDocument::parse(source_path, content.to_string()) {
            Ok(document) => Ok(document),
            Err(yaml_error) => match format {
                ConfigFormat::Yaml => anyhow::bail!(
                    "Failed to parse YAML from {}: {yaml_error}",
                    source_path.display()
                ),
                ConfigFormat::Json => {
                    // Valid JSON the YAML parser rejects (e.g. tab indentation)
                    debug!("Falling back to plain JSON parsing: {yaml_error}");
                    let value: serde_json::Value = serde_json::from_str(content).with_context(
                        || format!("Failed to parse JSON from {}", source_path.display()),
                    )?;
                    Ok(SpannedDocument::without_spans(
                        source_path,
                        content.to_string(),
                        value,
                    ))
                }
            },
        }
    }
}
