use crate::core::config::Config;
use crate::core::dataset::{Dataset, Source};
use crate::core::fetch::{Fetcher, FetcherOptions};
use crate::core::update::Updater;
use crate::error::Result;

/// Refreshes the local copies of the ISO datasets from their upstream URLs.
pub fn update_datasets(config: &Config, only: Option<Dataset>) -> Result<()> {
    let datasets: Vec<Dataset> = match only {
        Some(dataset) => vec![dataset],
        None => Dataset::ALL.to_vec(),
    };
    let sources = Source::upstream_all(&datasets)?;

    let fetcher = Fetcher::new(FetcherOptions::from(config))?;
    let updater = Updater::new(fetcher, config.output_dir.clone());

    match updater.update(&sources) {
        Ok(updated) => {
            for asset in &updated {
                log::info!("{}: {} bytes", asset.path.display(), asset.bytes);
            }
            Ok(())
        }
        Err(e) => {
            println!("failed");
            if let Some(failed) = e.failed_dataset() {
                let skipped = skipped_after(&datasets, failed);
                if !skipped.is_empty() {
                    let names: Vec<&str> = skipped.iter().map(|dataset| dataset.label()).collect();
                    log::warn!("{failed} failed, not fetched: {}", names.join(", "));
                }
            }
            Err(e)
        }
    }
}

/// Datasets queued after `failed`, which a halted run never requests.
fn skipped_after(datasets: &[Dataset], failed: Dataset) -> Vec<Dataset> {
    datasets
        .iter()
        .skip_while(|&&dataset| dataset != failed)
        .skip(1)
        .copied()
        .collect()
}
