//! # chief-export
//!
//! Renders the Chief Live Gaming pages to static HTML.
//!
//! ```bash
//! chief-export --out-dir dist --stylesheet /styles.css
//! chief-export --page home --year 2025     # reproducible build
//! RUST_LOG=debug chief-export              # per-file logging
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chief_export::{ExportConfig, export_site};
use chief_site::Page;
use clap::{Parser, ValueEnum};
use tracing::info;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "chief-export")]
#[command(about = "Render the Chief Live Gaming site to static HTML files")]
#[command(version)]
struct Args {
    /// Directory the HTML files are written to (created if missing)
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Pin the footer year instead of reading the clock
    #[arg(long)]
    year: Option<i32>,

    /// Stylesheet URL linked from every page
    #[arg(long)]
    stylesheet: Option<String>,

    /// Page to export (repeatable, defaults to all pages)
    #[arg(long = "page", value_enum)]
    pages: Vec<PageArg>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PageArg {
    Home,
    NotFound,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::NotFound => Page::NotFound,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the list of written files
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting chief-export v{}", env!("CARGO_PKG_VERSION"));

    let mut config = ExportConfig::new(&args.out_dir)
        .with_pages(args.pages.iter().copied().map(Page::from));
    if let Some(year) = args.year {
        config = config.with_year(year);
    }
    if let Some(href) = args.stylesheet {
        config = config.with_stylesheet(href);
    }

    let exported = export_site(&config)
        .with_context(|| format!("failed to export site to {}", args.out_dir.display()))?;

    for page in &exported {
        println!("wrote {} ({} bytes)", page.path.display(), page.bytes);
    }
    info!("Done: {} file(s)", exported.len());

    Ok(())
}
