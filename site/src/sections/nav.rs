use crate::components::{AsChild, Button, Link};
use crate::routes::SiteRoute;
use leptos::prelude::*;

const NAV_LINK_CLASS: &str = "text-sm hover:underline";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-6 py-4 border-b border-border bg-background/80 backdrop-blur">
            <Link href=SiteRoute::Home.path() class="text-lg font-semibold tracking-tight">
                {SiteRoute::Home.label()}
            </Link>

            <nav class="flex items-center gap-4">
                <Link href=SiteRoute::Portfolio.path() class=NAV_LINK_CLASS>
                    {SiteRoute::Portfolio.label()}
                </Link>
                <Link href=SiteRoute::Contact.path() class=NAV_LINK_CLASS>
                    {SiteRoute::Contact.label()}
                </Link>

                <Button>
                    <AsChild slot href=SiteRoute::Commission.path()>
                        {SiteRoute::Commission.label()}
                    </AsChild>
                </Button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{anchor_text, count_tags};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        view! { <Navbar /> }.to_html()
    }

    #[test]
    fn renders_four_links_and_no_native_button() {
        let html = render();

        assert_eq!(count_tags(&html, "a"), 4);
        assert_eq!(count_tags(&html, "button"), 0);
    }

    #[test]
    fn link_targets_and_labels() {
        let html = render();

        assert_eq!(anchor_text(&html, "/").as_deref(), Some("Chief Live Gaming"));
        assert_eq!(anchor_text(&html, "/portfolio").as_deref(), Some("Portfolio"));
        assert_eq!(anchor_text(&html, "/contact").as_deref(), Some("Contact"));
        assert_eq!(
            anchor_text(&html, "/commission").as_deref(),
            Some("Commission Work")
        );
    }

    #[test]
    fn commission_link_carries_button_styling() {
        let html = render();
        let commission = html
            .find(r#"href="/commission""#)
            .map(|at| &html[..at])
            .and_then(|head| head.rfind("<a "))
            .map(|start| &html[start..])
            .unwrap_or_default();

        assert!(commission.contains("bg-primary text-primary-foreground"));
    }

    #[test]
    fn rerender_is_identical() {
        assert_eq!(render(), render());
    }
}
