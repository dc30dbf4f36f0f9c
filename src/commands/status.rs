use crate::core::config::Config;
use crate::core::status::{self, AssetStatus};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn show_status(config: &Config, format: OutputFormat) -> Result<()> {
    let statuses = status::inspect(&config.output_dir)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
        OutputFormat::Text => print_text(&statuses),
    }

    Ok(())
}

fn print_text(statuses: &[AssetStatus]) {
    for status in statuses {
        if status.present {
            let size = status.size.unwrap_or_default();
            let modified = status
                .modified
                .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "  {:<15} {}  {size} bytes, modified {modified}",
                status.dataset.label(),
                status.path.display()
            );
        } else {
            println!(
                "  {:<15} {}  missing",
                status.dataset.label(),
                status.path.display()
            );
        }
    }

    if statuses.iter().any(|status| !status.present) {
        println!();
        println!("Run 'iso-assets update' to fetch missing datasets.");
    }
}
