use anyhow::Result;
use global_config_validator::endpoint::plan_endpoints;
use global_config_validator::loader::{ConfigFormat, GlobalConfigLoader};
use global_config_validator::validation::validate;
use std::path::Path;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum InspectType {
    /// The parsed document model
    Config,
    /// REST endpoints resolved from the document
    Endpoints,
}

pub fn inspect_command(
    config_path: &Path,
    object_type: InspectType,
    format: Option<ConfigFormat>,
    json: bool,
) -> Result<()> {
    let loader = match format {
        Some(format) => GlobalConfigLoader::with_format(config_path, format),
        None => GlobalConfigLoader::new(config_path)?,
    };
    let config = loader.load()?;
    validate(&config)?;

    match object_type {
        InspectType::Config => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        InspectType::Endpoints => {
            let endpoints = plan_endpoints(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&endpoints)?);
            } else {
                for endpoint in &endpoints {
                    endpoint.pretty_print();
                }
            }
        }
    }

    Ok(())
}
