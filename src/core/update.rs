use crate::core::dataset::{Dataset, Source};
use crate::core::fetch::Fetcher;
use crate::error::{IsoAssetsError, Result};
use crate::utils::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedAsset {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Fetches each source into the output directory, one after another.
pub struct Updater {
    fetcher: Fetcher,
    output_dir: PathBuf,
}

impl Updater {
    pub fn new(fetcher: Fetcher, output_dir: PathBuf) -> Self {
        Self {
            fetcher,
            output_dir,
        }
    }

    pub fn destination(&self, dataset: Dataset) -> PathBuf {
        self.output_dir.join(dataset.file_name())
    }

    /// Stops at the first failing source. Sources after it are never
    /// requested; files written before it are kept.
    pub fn update(&self, sources: &[Source]) -> Result<Vec<UpdatedAsset>> {
        fs::ensure_dir_exists(&self.output_dir)?;

        let mut updated = Vec::with_capacity(sources.len());
        for source in sources {
            println!("updating {}", source.dataset.label());

            let path = self.destination(source.dataset);
            let bytes = self.fetcher.fetch(&source.url, &path).map_err(|e| {
                IsoAssetsError::UpdateFailed {
                    dataset: source.dataset,
                    source: e,
                }
            })?;

            log::info!("{} updated from {}", source.dataset, source.url);
            updated.push(UpdatedAsset {
                dataset: source.dataset,
                path,
                bytes,
            });
        }

        Ok(updated)
    }
}
