use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Published sheet CSV URL (overrides `PRINT_CATALOG_SHEET_URL`).
    #[arg(long, global = true)]
    pub sheet_url: Option<String>,

    /// Delay before serving demo data (overrides `PRINT_CATALOG_DEMO_DELAY_MS`).
    #[arg(long, global = true)]
    pub demo_delay_ms: Option<u64>,

    /// Whole-request timeout for the sheet fetch.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Fetch(FetchArgs),
    Show(ShowArgs),
    Materials,
    Template(TemplateArgs),
    NormalizeLink(NormalizeLinkArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One snapshot object with origin, timestamp and prints.
    Json,
    /// One print per line.
    Jsonl,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Only featured prints.
    #[arg(long)]
    pub featured: bool,

    /// Only prints in this category (`All` keeps everything).
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print slug.
    #[arg(long)]
    pub slug: String,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Output file path (default: stdout). Existing files are not overwritten.
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct NormalizeLinkArgs {
    /// Image or share link.
    #[arg(long)]
    pub url: String,
}
