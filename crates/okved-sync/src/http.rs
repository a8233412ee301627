use crate::dataset::parse_code_tree;
use crate::source::DatasetSource;
use crate::{Result, SyncError};
use okved_core::CodeTree;
use std::time::Duration;

#[cfg(feature = "http-fetch")]
const DEFAULT_USER_AGENT: &str = "phone-okved";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    options: FetchOptions,
}

impl HttpSource {
    pub fn new(url: String, options: FetchOptions) -> Self {
        Self { url, options }
    }
}

impl DatasetSource for HttpSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    fn fetch_tree(&self) -> Result<CodeTree> {
        let body = fetch_dataset(&self.url, &self.options)?;
        parse_code_tree(&body)
    }
}

#[cfg(feature = "http-fetch")]
pub fn fetch_dataset(dataset_url: &str, options: &FetchOptions) -> Result<String> {
    use reqwest::blocking::Client;
    use tracing::debug;
    use url::Url;

    let url = Url::parse(dataset_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SyncError::Parse(format!(
            "dataset url must use http or https: {dataset_url}"
        )));
    }

    // the blocking client applies `timeout` to reads and writes
    let client = Client::builder()
        .user_agent(options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
        .connect_timeout(options.connect_timeout)
        .timeout(options.read_timeout)
        .build()?;

    debug!(url = %url, "fetching dataset");
    let response = client.get(url).send()?.error_for_status()?;
    let body = response.text()?;
    debug!(bytes = body.len(), "dataset downloaded");
    Ok(body)
}

#[cfg(not(feature = "http-fetch"))]
pub fn fetch_dataset(_dataset_url: &str, _options: &FetchOptions) -> Result<String> {
    Err(SyncError::Unavailable(
        "HTTP dataset download requires the http-fetch feature".to_string(),
    ))
}
