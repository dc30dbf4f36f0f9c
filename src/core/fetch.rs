use crate::core::config::Config;
use crate::error::{FetchError, IsoAssetsError, Result};
use crate::utils::fs;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::path::Path;
use std::time::Duration;
use url::Url;

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct FetcherOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Refuse anything but `https://`, including redirect targets.
    pub https_only: bool,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for FetcherOptions {
    fn from(config: &Config) -> Self {
        Self {
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
            user_agent: config.user_agent.clone(),
            https_only: true,
        }
    }
}

/// Downloads a single URL into a local file.
pub struct Fetcher {
    client: Client,
    https_only: bool,
}

impl Fetcher {
    pub fn new(options: FetcherOptions) -> Result<Self> {
        // Certificate verification stays on; rustls checks against the bundled webpki roots.
        let client = Client::builder()
            .use_rustls_tls()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .https_only(options.https_only)
            .build()
            .map_err(|e| {
                IsoAssetsError::config_error(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            https_only: options.https_only,
        })
    }

    /// Fetches `url` and replaces `destination` with the response body.
    ///
    /// The body is streamed into a temporary file beside `destination` and
    /// renamed into place once complete, so a failed fetch never leaves a
    /// truncated file behind or disturbs an existing one. An empty body counts
    /// as a failure. Returns the number of bytes written.
    pub fn fetch(&self, url: &Url, destination: &Path) -> std::result::Result<u64, FetchError> {
        if self.https_only && url.scheme() != "https" {
            return Err(FetchError::InsecureUrl {
                url: url.to_string(),
            });
        }

        log::debug!("GET {url}");
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if response.url() != url {
            log::debug!("{url} redirected to {}", response.url());
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let io_error = |source: std::io::Error| FetchError::Io {
            path: destination.to_path_buf(),
            source,
        };

        let mut staging = fs::create_staging_file(destination).map_err(io_error)?;
        log::debug!("staging download in {}", staging.path().display());

        let bytes = response
            .copy_to(&mut staging)
            .map_err(|source| FetchError::Transfer {
                url: url.to_string(),
                source,
            })?;
        if bytes == 0 {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }
        staging.as_file().sync_all().map_err(io_error)?;
        staging
            .persist(destination)
            .map_err(|e| io_error(e.error))?;

        log::info!("wrote {bytes} bytes to {}", destination.display());
        Ok(bytes)
    }
}
