//! Root document component - the complete HTML page for static export

use crate::layout::SiteLayout;
use crate::pages::{HomePage, NotFoundPage};
use crate::{Page, RenderOptions};
use leptos::prelude::*;

/// `<html>` shell around [`SiteLayout`] and one page.
#[component]
pub fn SiteDocument(page: Page, options: RenderOptions) -> impl IntoView {
    let RenderOptions {
        year,
        stylesheet,
        title,
    } = options;

    let stylesheet = stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> });
    let content = match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {stylesheet}
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                <SiteLayout year=year>{content}</SiteLayout>
            </body>
        </html>
    }
}
