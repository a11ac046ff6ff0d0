// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use crate::{
    config::{consts::DEFAULT_TIMEOUT_SECS, options::{AppOptions, ExportFormat}},
    data::{ExtractionResult, Tier},
    file,
    progress::Progress,
    scrape::scrape_url,
    specs::SiteProfile,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

/// Scrape product name, price and rating from a search results page.
#[derive(Parser, Debug)]
#[command(name = "shop_scrape", version)]
struct Args {
    /// Search results page to scrape
    url: Option<String>,

    /// Output file (extension follows --format) [default: out/scraped_products.csv]
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Site profile JSON (container/field markers); built-in Flipkart profile otherwise
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Omit the header row
    #[arg(long)]
    no_headers: bool,

    /// Print the table to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Also print an HTML download link (base64 data URI)
    #[arg(long)]
    link: bool,
}

/// Prints tier notices to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn tier_started(&mut self, tier: Tier) {
        eprintln!("{}", tier.notice());
    }
}

fn options_from(args: &Args) -> Result<AppOptions> {
    let mut opts = AppOptions::default();

    opts.scrape.url = args.url.clone().unwrap_or_default();
    opts.scrape.timeout_secs = args.timeout;
    if let Some(path) = &args.profile {
        opts.scrape.profile = SiteProfile::from_json_file(path)?;
    }

    opts.export.format = match args.format {
        Format::Csv => ExportFormat::Csv,
        Format::Tsv => ExportFormat::Tsv,
    };
    opts.export.include_headers = !args.no_headers;
    if let Some(out) = &args.out {
        opts.export.set_path(&out.to_string_lossy());
    }
    Ok(opts)
}

pub fn run() -> Result<()> {
    let _log_guard = crate::log::init(true)?;

    let args = Args::parse();
    let opts = options_from(&args)?;

    let res = scrape_url(&opts.scrape, Some(&mut CliProgress));
    let records = match &res {
        ExtractionResult::Rows(rows) => rows,
        ExtractionResult::Failure(msg) => return Err(eyre!("{msg}")),
    };
    eprintln!("{}", res.message());
    eprintln!("Successfully scraped {} products!", records.len());

    let text = file::export_text(&opts.export, records)?;
    if args.stdout {
        print!("{text}");
    } else {
        let path = file::write_export(&opts.export, records)?;
        println!("Wrote {}", path.display());
    }
    if args.link {
        println!("{}", file::download_link(&text, &opts.export.file_name()));
    }
    Ok(())
}
