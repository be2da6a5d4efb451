use anyhow::Result;
use global_config_validator::loader::{ConfigFormat, GlobalConfigLoader};
use global_config_validator::validation::validate;
use miette::Report;
use std::path::Path;

pub fn validate_command(config_path: &Path, format: Option<ConfigFormat>) -> Result<()> {
    println!("Validating global config: {}", config_path.display());

    let loader = match format {
        Some(format) => GlobalConfigLoader::with_format(config_path, format),
        None => GlobalConfigLoader::new(config_path)?,
    };
    let config = loader.load()?;

    if let Err(err) = validate(&config) {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
        anyhow::bail!("Validation failed for {}", config_path.display());
    }

    println!("\n✅ All validations passed!");
    Ok(())
}
