use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use global_config_validator::loader::ConfigFormat;

mod commands;

use commands::{InspectType, inspect_command, validate_command};

#[derive(Parser)]
#[command(
    name = "gcv",
    about = "Validates add-on global config documents before code generation",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the global config (JSON or YAML)
    #[arg(
        short,
        long,
        default_value = "globalConfig.json",
        env = "GLOBAL_CONFIG_PATH",
        global = true
    )]
    config: PathBuf,

    /// Force the input format instead of guessing it from the extension
    #[arg(long, value_enum, global = true)]
    format: Option<ConfigFormat>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the global config (default command)
    Validate,

    /// Inspect the validated document
    Inspect {
        #[arg(value_enum, default_value = "config")]
        object_type: InspectType,

        /// Print endpoints as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Validate) | None => {
            validate_command(&cli.config, cli.format)?;
        }
        Some(Commands::Inspect { object_type, json }) => {
            inspect_command(&cli.config, object_type, cli.format, json)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("global_config_validator=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("global_config_validator=info"), // -v: info messages
        _ => EnvFilter::new("global_config_validator=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
