use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use iso_assets::commands;
use iso_assets::commands::status::OutputFormat;
use iso_assets::core::config::Config;
use iso_assets::core::dataset::Dataset;

#[derive(Parser)]
#[clap(name = "iso-assets")]
#[clap(about = "Fetch the ISO 639-3 language table and ISO 3166 country data")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory to write language.tab and country.json into
    #[clap(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Path to a config.toml (default: user config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download both datasets (the default when no command is given)
    Update {
        /// Only fetch this dataset
        #[clap(long, value_enum)]
        only: Option<Dataset>,
    },
    /// Show which datasets are present locally
    Status {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::load(cli.config.as_deref()).and_then(|mut config| {
        if let Some(output_dir) = cli.output_dir {
            config.output_dir = output_dir;
        }

        match cli.command.unwrap_or(Commands::Update { only: None }) {
            Commands::Update { only } => commands::update::update_datasets(&config, only),
            Commands::Status { format } => commands::status::show_status(&config, format),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_update() {
        let cli = Cli::try_parse_from(["iso-assets"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_status_format_parses_known_values() {
        let cli = Cli::try_parse_from(["iso-assets", "status", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Status {
                format: OutputFormat::Json
            })
        ));

        let cli = Cli::try_parse_from(["iso-assets", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Status {
                format: OutputFormat::Text
            })
        ));
    }

    #[test]
    fn test_status_format_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["iso-assets", "status", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_only_accepts_dataset_names() {
        let cli = Cli::try_parse_from(["iso-assets", "update", "--only", "country"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update {
                only: Some(Dataset::Country)
            })
        ));
        assert!(Cli::try_parse_from(["iso-assets", "update", "--only", "currency"]).is_err());
    }
}
