//! The two reference datasets this tool keeps up to date.

use crate::error::{IsoAssetsError, Result};
use serde::Serialize;
use std::fmt;
use url::Url;

pub const LANGUAGE_TABLE_URL: &str =
    "https://iso639-3.sil.org/sites/iso639-3/files/downloads/iso-639-3.tab";
pub const COUNTRY_DATA_URL: &str =
    "https://raw.githubusercontent.com/lukes/ISO-3166-Countries-with-Regional-Codes/master/all/all.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// ISO 639-3 code table (tab-separated)
    Language,
    /// ISO 3166 countries with regional codes (JSON)
    Country,
}

impl Dataset {
    /// Every dataset, in the order they are fetched.
    pub const ALL: [Dataset; 2] = [Dataset::Language, Dataset::Country];

    pub fn upstream_url(&self) -> &'static str {
        match self {
            Dataset::Language => LANGUAGE_TABLE_URL,
            Dataset::Country => COUNTRY_DATA_URL,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Language => "language.tab",
            Dataset::Country => "country.json",
        }
    }

    /// Label used in the progress notice printed before each fetch.
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Language => "language table",
            Dataset::Country => "country json",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a dataset is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub dataset: Dataset,
    pub url: Url,
}

impl Source {
    pub fn new(dataset: Dataset, url: Url) -> Self {
        Self { dataset, url }
    }

    pub fn upstream(dataset: Dataset) -> Result<Self> {
        let url = Url::parse(dataset.upstream_url()).map_err(|e| {
            IsoAssetsError::config_error(format!("invalid upstream URL for {dataset}: {e}"))
        })?;
        Ok(Self::new(dataset, url))
    }

    /// Upstream sources for `datasets`, preserving their order.
    pub fn upstream_all(datasets: &[Dataset]) -> Result<Vec<Self>> {
        datasets.iter().copied().map(Self::upstream).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fetch_order_is_language_then_country() {
        assert_eq!(Dataset::ALL, [Dataset::Language, Dataset::Country]);
    }

    #[test]
    fn test_file_names_and_labels() {
        assert_eq!(Dataset::Language.file_name(), "language.tab");
        assert_eq!(Dataset::Country.file_name(), "country.json");
        assert_eq!(Dataset::Language.to_string(), "language table");
        assert_eq!(Dataset::Country.to_string(), "country json");
    }

    #[test]
    fn test_upstream_sources_are_https() {
        let sources = Source::upstream_all(&Dataset::ALL).unwrap();
        assert_eq!(sources.len(), 2);
        for source in &sources {
            assert_eq!(source.url.scheme(), "https");
            assert_eq!(source.url.as_str(), source.dataset.upstream_url());
        }
    }
}
