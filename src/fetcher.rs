use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

use crate::config::CatalogConfig;
use crate::demo::demo_catalog;
use crate::formats::{Catalog, CatalogOrigin, Print};
use crate::mapper::{ColumnLayout, map_row};
use crate::tokenizer::tokenize_line;

/// Where the raw sheet CSV comes from.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self) -> anyhow::Result<String>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSheetSource {
    pub fn new(url: Url, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build sheet http client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .header(USER_AGENT, concat!("print-catalog/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("failed to fetch sheet ({status})");
        }

        response.text().await.context("read sheet body")
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Loads the catalog from the configured sheet, or the demo catalog when the
/// sheet is missing or broken.
#[derive(Clone)]
pub struct CatalogFetcher {
    source: Option<Arc<dyn SheetSource>>,
    demo_delay: Duration,
}

impl std::fmt::Debug for CatalogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetcher")
            .field("source", &self.source.as_ref().map(|s| s.describe()))
            .field("demo_delay", &self.demo_delay)
            .finish()
    }
}

impl CatalogFetcher {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let source = match &config.sheet_url {
            Some(url) => {
                let source = HttpSheetSource::new(url.clone(), config.request_timeout)
                    .context("create sheet source")?;
                Some(Arc::new(source) as Arc<dyn SheetSource>)
            }
            None => None,
        };

        Ok(Self {
            source,
            demo_delay: config.demo_delay,
        })
    }

    pub fn with_source(source: Arc<dyn SheetSource>) -> Self {
        Self {
            source: Some(source),
            demo_delay: Duration::ZERO,
        }
    }

    pub fn demo_only(demo_delay: Duration) -> Self {
        Self {
            source: None,
            demo_delay,
        }
    }

    /// Always yields a usable catalog; failures degrade to the demo data.
    pub async fn fetch_prints(&self) -> Vec<Print> {
        self.load().await.prints
    }

    pub async fn load(&self) -> Catalog {
        let Some(source) = &self.source else {
            tracing::info!("no sheet url configured; using demo catalog");
            if !self.demo_delay.is_zero() {
                tokio::time::sleep(self.demo_delay).await;
            }
            return Catalog {
                origin: CatalogOrigin::Demo,
                prints: demo_catalog().to_vec(),
            };
        };

        tracing::debug!(source = %source.describe(), "fetching sheet");
        match source.fetch_csv().await {
            Ok(text) => {
                let prints = parse_catalog(&text);
                if prints.is_empty() {
                    tracing::warn!(source = %source.describe(), "sheet has no usable rows");
                }
                Catalog {
                    origin: CatalogOrigin::Remote,
                    prints,
                }
            }
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::warn!(
                    source = %source.describe(),
                    error = %reason,
                    "failed to load sheet; falling back to demo catalog"
                );
                Catalog {
                    origin: CatalogOrigin::Fallback { reason },
                    prints: demo_catalog().to_vec(),
                }
            }
        }
    }
}

/// Parses a whole sheet body. The first line is the header and never becomes
/// a record; short rows are dropped.
pub fn parse_catalog(text: &str) -> Vec<Print> {
    let mut lines = text.split('\n');
    let header = tokenize_line(lines.next().unwrap_or_default());
    let layout = ColumnLayout::from_header(&header);
    tracing::debug!(from_header = layout.is_from_header(), "resolved column layout");

    let mut prints = Vec::new();
    for (index, line) in lines.enumerate() {
        let fields = tokenize_line(line);
        match map_row(&fields, &layout) {
            Some(print) => prints.push(print),
            None => tracing::debug!(line = index + 2, fields = fields.len(), "dropping short row"),
        }
    }
    prints
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const SHEET: &str = "slug,title,description,category,material,purpose,notes,featured,images,imageAlts\n\
a,Alpha,First,Sports,PLA,gift,none,TRUE,https://drive.google.com/file/d/ID1/view,Alpha alt\n\
short,row\n\
b,Beta,\"Second, with comma\",Gifts,PETG,custom,,false,,\n";

    struct StubSource {
        body: anyhow::Result<String>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: Ok(body.to_owned()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                body: Err(anyhow::anyhow!(message.to_owned())),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SheetSource for StubSource {
        async fn fetch_csv(&self) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(err) => anyhow::bail!("{err}"),
            }
        }

        fn describe(&self) -> String {
            "stub".to_owned()
        }
    }

    #[test]
    fn parse_catalog_skips_header_and_short_rows() {
        let prints = parse_catalog(SHEET);
        let slugs = prints.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>();
        assert_eq!(slugs, vec!["a", "b"]);

        assert!(prints[0].featured);
        assert_eq!(
            prints[0].images,
            vec!["https://drive.google.com/thumbnail?id=ID1&sz=w1000"]
        );
        assert_eq!(prints[1].description, "Second, with comma");
        assert!(!prints[1].featured);
        assert!(prints[1].images.is_empty());
    }

    #[test]
    fn parse_catalog_handles_crlf_and_header_only() {
        let crlf = SHEET.replace('\n', "\r\n");
        let prints = parse_catalog(&crlf);
        assert_eq!(prints.len(), 2);
        assert_eq!(prints[0].image_alts, vec!["Alpha alt"]);

        assert!(parse_catalog("slug,title\n").is_empty());
        assert!(parse_catalog("").is_empty());
    }

    #[tokio::test]
    async fn remote_rows_are_returned_in_order() {
        let source = StubSource::ok(SHEET);
        let fetcher = CatalogFetcher::with_source(source.clone());

        let catalog = fetcher.load().await;
        assert_eq!(catalog.origin, CatalogOrigin::Remote);
        assert_eq!(catalog.prints.len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn source_failure_falls_back_to_demo() {
        let fetcher = CatalogFetcher::with_source(StubSource::failing("connection refused"));

        let catalog = fetcher.load().await;
        match &catalog.origin {
            CatalogOrigin::Fallback { reason } => assert!(reason.contains("connection refused")),
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(catalog.prints, demo_catalog());
    }

    #[tokio::test]
    async fn missing_source_serves_demo() {
        let fetcher = CatalogFetcher::new(&CatalogConfig::default()).expect("build fetcher");

        let catalog = fetcher.load().await;
        assert_eq!(catalog.origin, CatalogOrigin::Demo);
        assert_eq!(catalog.prints, demo_catalog());
        assert_eq!(fetcher.fetch_prints().await, demo_catalog());
    }

    #[tokio::test(start_paused = true)]
    async fn demo_delay_is_applied() {
        let fetcher = CatalogFetcher::demo_only(Duration::from_millis(600));
        let started = tokio::time::Instant::now();

        let prints = fetcher.fetch_prints().await;
        assert_eq!(prints.len(), demo_catalog().len());
        assert!(started.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test]
    async fn header_only_sheet_is_an_empty_remote_catalog() {
        let fetcher = CatalogFetcher::with_source(StubSource::ok("slug,title,description\n"));

        let catalog = fetcher.load().await;
        assert!(catalog.origin.is_remote());
        assert!(catalog.prints.is_empty());
    }
}
