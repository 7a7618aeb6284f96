//! kinofetch CLI - fetch film metadata and export it to a spreadsheet
//!
//! ```bash
//! kinofetch 2013 --format xlsx              # Excel workbook
//! kinofetch 2013 --format csv               # semicolon CSV (Excel-friendly)
//! kinofetch 2013 --format csv-simple       # plain comma CSV
//! ```
//!
//! API keys come from `--api-key`/`--unofficial-api-key`, the
//! `KINOPOISK_API_KEY`/`KINOPOISK_UNOFFICIAL_API_KEY` environment
//! variables, or a `.env` file.

use clap::{Parser, ValueEnum};
use kinofetch::pipeline::{ExportFormat, PipelineError, Session, export};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kinofetch")]
#[command(about = "Fetch film metadata from kinopoisk.dev and export it", long_about = None)]
struct Cli {
    /// Numeric film/series ID
    film_id: String,

    /// kinopoisk.dev API key
    #[arg(long, env = "KINOPOISK_API_KEY")]
    api_key: String,

    /// kinopoiskapiunofficial.tech API key; when set, that source is
    /// queried first for the cast list
    #[arg(long, env = "KINOPOISK_UNOFFICIAL_API_KEY")]
    unofficial_api_key: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: FormatArg,

    /// Output file (default: film_{id}.xlsx / film_{id}.csv in cwd)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Xlsx,
    Csv,
    CsvSimple,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Xlsx => Self::Xlsx,
            FormatArg::Csv => Self::Csv,
            FormatArg::CsvSimple => Self::CsvSimple,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    if cli.film_id.is_empty() || !cli.film_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(PipelineError::Parse(format!(
            "Film ID must be numeric, got '{}'",
            cli.film_id
        )));
    }

    let session = Session::fetch(
        &cli.film_id,
        &cli.api_key,
        cli.unofficial_api_key.as_deref(),
    )
    .await?;

    for (key, value) in session.record.rows() {
        println!("{key}: {value}");
    }
    println!();
    println!(
        "Cast: {} entries ({} source)",
        session.cast.len(),
        session.cast_origin
    );

    let result = export(&session, cli.format.into())?;
    if let Some(warning) = &result.warning {
        warn!("{warning}");
    }

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&result.file_name));
    std::fs::write(&path, &result.bytes)?;
    println!("Saved {}", path.display());

    Ok(())
}
