//! # chief-export
//!
//! Writes the site's pages as static HTML files.
//!
//! ```rust,no_run
//! use chief_export::{export_site, ExportConfig};
//!
//! let config = ExportConfig::new("dist").with_year(2025);
//! for exported in export_site(&config)? {
//!     println!("{} ({} bytes)", exported.path.display(), exported.bytes);
//! }
//! # Ok::<(), chief_export::ExportError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chief_site::{Page, RenderOptions, render_page};
use tracing::{debug, info};

/// Years `chrono` and the footer copy both handle.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Error type for the static export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Output directory could not be created
    #[error("cannot create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Page file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Pinned footer year out of range
    #[error("invalid year {0}: expected 1..=9999")]
    InvalidYear(i32),
}

/// What to export and where.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    /// Pages to write; empty means every page
    pub pages: Vec<Page>,
    pub options: RenderOptions,
}

impl ExportConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            pages: Vec::new(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.options.year = Some(year);
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.options.stylesheet = Some(href.into());
        self
    }

    pub fn with_pages(mut self, pages: impl IntoIterator<Item = Page>) -> Self {
        self.pages = pages.into_iter().collect();
        self
    }

    /// Requested pages in `Page::ALL` order, without duplicates.
    fn selected_pages(&self) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.pages.is_empty() || self.pages.contains(page))
            .collect()
    }
}

/// One file written by [`export_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedPage {
    pub page: Page,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render the selected pages and write them into `config.out_dir`.
pub fn export_site(config: &ExportConfig) -> Result<Vec<ExportedPage>, ExportError> {
    if let Some(year) = config.options.year.filter(|year| !YEAR_RANGE.contains(year)) {
        return Err(ExportError::InvalidYear(year));
    }

    fs::create_dir_all(&config.out_dir).map_err(|source| ExportError::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let pages = config.selected_pages();
    info!(
        "Exporting {} page(s) to {}",
        pages.len(),
        config.out_dir.display()
    );

    pages
        .into_iter()
        .map(|page| write_page(&config.out_dir, page, &config.options))
        .collect()
}

fn write_page(
    out_dir: &Path,
    page: Page,
    options: &RenderOptions,
) -> Result<ExportedPage, ExportError> {
    let path = out_dir.join(page.file_name());
    let html = render_page(page, options);

    fs::write(&path, &html).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("{:?} -> {} ({} bytes)", page, path.display(), html.len());

    Ok(ExportedPage {
        page,
        path,
        bytes: html.len(),
    })
}
