//! # chief-site
//!
//! Leptos components, pages and routes for the Chief Live Gaming website.
//!
//! The same component tree runs in two places:
//!
//! - **Browser** - [`App`] is mounted by the `web/` crate (`csr` feature) and
//!   wrapped in a `leptos_router` router, so navbar links navigate
//!   client-side.
//! - **Static export** - [`render_page`] renders a full HTML document to a
//!   string (`ssr` feature, on by default), which `chief-export` writes to
//!   disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use chief_site::{render_page, Page, RenderOptions};
//!
//! let options = RenderOptions {
//!     year: Some(2025),
//!     ..Default::default()
//! };
//! let html = render_page(Page::Home, &options);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2025 Chief Live Gaming. All rights reserved."));
//! ```
//!
//! ## Architecture
//!
//! - [`routes`] - paths, labels, site name
//! - [`components`] - `Button` (with the `AsChild` slot) and `Link`
//! - [`sections`] - `Navbar` and `Footer`
//! - [`pages`] - `HomePage` and `NotFoundPage`
//!
//! Styling is Tailwind / shadcn utility classes; the stylesheet itself is
//! built elsewhere and linked through [`RenderOptions::stylesheet`].

pub mod components;
pub mod pages;
pub mod routes;
pub mod sections;

mod app;
mod document;
mod layout;

#[cfg(test)]
mod test_utils;

pub use app::App;
pub use document::SiteDocument;
pub use layout::SiteLayout;
pub use routes::{SITE_NAME, SiteRoute};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// A page that can be rendered to a standalone HTML file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::NotFound];

    /// File name inside the export directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::NotFound => "404.html",
        }
    }

    /// Page served for a request path. Routes without a page of their own
    /// (and unknown paths) get [`Page::NotFound`].
    pub fn for_path(path: &str) -> Page {
        match SiteRoute::from_path(path) {
            Some(SiteRoute::Home) => Page::Home,
            Some(SiteRoute::Portfolio | SiteRoute::Contact | SiteRoute::Commission) | None => {
                Page::NotFound
            }
        }
    }
}

/// Knobs for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the footer; `None` reads the clock at render time
    pub year: Option<i32>,
    /// URL of the compiled stylesheet, emitted as `<link rel="stylesheet">`
    pub stylesheet: Option<String>,
    /// Document `<title>`
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            year: None,
            stylesheet: None,
            title: SITE_NAME.to_string(),
        }
    }
}

/// Render `page` as a complete HTML document, including `<!DOCTYPE html>`.
pub fn render_page(page: Page, options: &RenderOptions) -> String {
    let doc = view! { <SiteDocument page=page options=options.clone() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
