use std::fs::OpenOptions;
use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser as _;

use print_catalog::catalog;
use print_catalog::cli::{Cli, Command, FetchArgs, OutputFormat, SourceArgs, TemplateArgs};
use print_catalog::config::{self, CatalogConfig};
use print_catalog::fetcher::CatalogFetcher;
use print_catalog::formats::{Catalog, CatalogSnapshot};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    print_catalog::logging::init(cli.verbose).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        Command::Fetch(args) => {
            let fetcher = build_fetcher(&cli.source)?;
            fetch(&fetcher, args).await.context("fetch")?;
        }
        Command::Show(args) => {
            let fetcher = build_fetcher(&cli.source)?;
            let prints = fetcher.fetch_prints().await;
            let print = catalog::find_by_slug(&prints, &args.slug)
                .ok_or_else(|| anyhow::anyhow!("print not found: {}", args.slug))?;
            let json = serde_json::to_string_pretty(print).context("serialize print")?;
            println!("{json}");
        }
        Command::Materials => {
            let fetcher = build_fetcher(&cli.source)?;
            let prints = fetcher.fetch_prints().await;
            for material in catalog::materials(&prints) {
                println!("{material}");
            }
        }
        Command::Template(args) => {
            template(args).context("template")?;
        }
        Command::NormalizeLink(args) => {
            println!("{}", print_catalog::normalize_image_link(&args.url));
        }
    }

    Ok(())
}

fn build_fetcher(args: &SourceArgs) -> anyhow::Result<CatalogFetcher> {
    let mut config = CatalogConfig::from_env().context("load config from environment")?;
    if let Some(raw) = args.sheet_url.as_deref() {
        config.sheet_url = match raw.trim() {
            "" => None,
            raw => Some(config::parse_sheet_url(raw).context("parse --sheet-url")?),
        };
    }
    if let Some(ms) = args.demo_delay_ms {
        config.demo_delay = Duration::from_millis(ms);
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout = Some(Duration::from_secs(secs));
    }
    tracing::debug!(?config, "resolved config");

    CatalogFetcher::new(&config).context("create catalog fetcher")
}

async fn fetch(fetcher: &CatalogFetcher, args: FetchArgs) -> anyhow::Result<()> {
    let loaded = fetcher.load().await;
    tracing::info!(origin = ?loaded.origin, count = loaded.prints.len(), "loaded catalog");

    let mut prints = loaded.prints;
    if args.featured {
        prints = catalog::featured(&prints).into_iter().cloned().collect();
    }
    if let Some(category) = args.category.as_deref() {
        if !catalog::is_known_category(category) {
            tracing::warn!(category, "filtering on an unrecognized category");
        }
        prints = catalog::by_category(&prints, category)
            .into_iter()
            .cloned()
            .collect();
    }

    match args.format {
        OutputFormat::Json => {
            let snapshot = CatalogSnapshot::from(Catalog {
                origin: loaded.origin,
                prints,
            });
            let json = serde_json::to_string_pretty(&snapshot).context("serialize catalog")?;
            println!("{json}");
        }
        OutputFormat::Jsonl => {
            let mut stdout = std::io::stdout().lock();
            for print in &prints {
                serde_json::to_writer(&mut stdout, print).context("serialize print")?;
                stdout.write_all(b"\n").context("write newline")?;
            }
            stdout.flush().context("flush stdout")?;
        }
    }

    Ok(())
}

fn template(args: TemplateArgs) -> anyhow::Result<()> {
    let csv = print_catalog::csv_template();
    let Some(out) = args.out else {
        println!("{csv}");
        return Ok(());
    };

    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&out)
        .with_context(|| format!("create template: {out}"))?;
    file.write_all(csv.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .with_context(|| format!("write template: {out}"))?;
    Ok(())
}
