use crate::sections::{Footer, Navbar};
use leptos::prelude::*;

/// Navbar, page content, footer.
#[component]
pub fn SiteLayout(
    /// Forwarded to [`Footer`]
    #[prop(into, default = None)]
    year: Option<i32>,
    children: Children,
) -> impl IntoView {
    view! {
        <Navbar />
        <main>{children()}</main>
        <Footer year=year />
    }
}
