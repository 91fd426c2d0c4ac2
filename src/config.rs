use std::time::Duration;

use anyhow::Context as _;
use url::Url;

pub const SHEET_URL_ENV: &str = "PRINT_CATALOG_SHEET_URL";
pub const DEMO_DELAY_ENV: &str = "PRINT_CATALOG_DEMO_DELAY_MS";

/// Fetcher settings. Read once at startup and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Published sheet CSV URL. `None` serves the demo catalog.
    pub sheet_url: Option<Url>,
    /// Pause before serving the demo catalog when no sheet is configured.
    pub demo_delay: Duration,
    /// Whole-request timeout. `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
}

impl CatalogConfig {
    pub fn with_sheet_url(sheet_url: Url) -> Self {
        Self {
            sheet_url: Some(sheet_url),
            ..Self::default()
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let sheet_url = std::env::var(SHEET_URL_ENV).ok();
        let demo_delay_ms = std::env::var(DEMO_DELAY_ENV).ok();
        Self::from_raw(sheet_url.as_deref(), demo_delay_ms.as_deref())
            .with_context(|| format!("read {SHEET_URL_ENV}/{DEMO_DELAY_ENV}"))
    }

    pub fn from_raw(sheet_url: Option<&str>, demo_delay_ms: Option<&str>) -> anyhow::Result<Self> {
        let sheet_url = match sheet_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => Some(parse_sheet_url(raw)?),
            None => None,
        };

        let demo_delay = match demo_delay_ms.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => {
                let ms = raw
                    .parse::<u64>()
                    .with_context(|| format!("invalid demo delay (ms): {raw:?}"))?;
                Duration::from_millis(ms)
            }
            None => Duration::ZERO,
        };

        Ok(Self {
            sheet_url,
            demo_delay,
            request_timeout: None,
        })
    }
}

pub fn parse_sheet_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("parse sheet url: {raw:?}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("sheet url must be http/https: {url}");
    }
    Ok(url)
}
