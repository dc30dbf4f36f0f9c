use crate::core::dataset::Dataset;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct AssetStatus {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub present: bool,
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

/// Reports on the local copy of every dataset in `output_dir`.
pub fn inspect(output_dir: &Path) -> Result<Vec<AssetStatus>> {
    Dataset::ALL
        .iter()
        .map(|&dataset| inspect_one(dataset, output_dir.join(dataset.file_name())))
        .collect()
}

fn inspect_one(dataset: Dataset, path: PathBuf) -> Result<AssetStatus> {
    let metadata = match std::fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => {
            log::warn!("{} exists but is not a regular file", path.display());
            return Ok(missing(dataset, path));
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(missing(dataset, path)),
        Err(e) => return Err(e.into()),
    };

    Ok(AssetStatus {
        dataset,
        path,
        present: true,
        size: Some(metadata.len()),
        modified: metadata.modified().ok().map(DateTime::<Local>::from),
    })
}

fn missing(dataset: Dataset, path: PathBuf) -> AssetStatus {
    AssetStatus {
        dataset,
        path,
        present: false,
        size: None,
        modified: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_are_reported() {
        let dir = TempDir::new().unwrap();
        let statuses = inspect(dir.path()).unwrap();

        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|status| !status.present));
        assert!(statuses.iter().all(|status| status.size.is_none()));
    }

    #[test]
    fn test_present_file_has_size_and_mtime() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("language.tab"), "eng\teng\t\t\tEnglish\n").unwrap();

        let statuses = inspect(dir.path()).unwrap();
        let language = &statuses[0];
        assert_eq!(language.dataset, Dataset::Language);
        assert!(language.present);
        assert_eq!(language.size, Some(18));
        assert!(language.modified.is_some());
        assert!(!statuses[1].present);
    }

    #[test]
    fn test_directory_in_place_of_file_is_not_present() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("country.json")).unwrap();

        let statuses = inspect(dir.path()).unwrap();
        assert!(!statuses[1].present);
    }

    #[test]
    fn test_serializes_dataset_in_lowercase() {
        let dir = TempDir::new().unwrap();
        let json = serde_json::to_value(inspect(dir.path()).unwrap()).unwrap();
        assert_eq!(json[0]["dataset"], "language");
        assert_eq!(json[1]["dataset"], "country");
        assert_eq!(json[1]["present"], false);
    }
}
