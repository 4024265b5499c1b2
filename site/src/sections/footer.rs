use crate::routes::SITE_NAME;
use chrono::{Datelike, Local};
use leptos::prelude::*;

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

#[component]
pub fn Footer(
    /// Pin the year instead of reading the clock at render time
    #[prop(into, default = None)]
    year: Option<i32>,
) -> impl IntoView {
    let notice = copyright_notice(year.unwrap_or_else(current_year));

    view! {
        <footer class="border-t border-border py-6 text-center text-sm text-muted-foreground">
            {notice}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn notice_for_2025() {
        assert_eq!(
            copyright_notice(2025),
            "© 2025 Chief Live Gaming. All rights reserved."
        );
    }

    #[test]
    fn pinned_year_is_rendered() {
        let html = view! { <Footer year=2025 /> }.to_html();

        assert!(html.contains("© 2025 Chief Live Gaming. All rights reserved."));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn unpinned_footer_uses_clock_year() {
        let before = current_year();
        let html = view! { <Footer /> }.to_html();
        let after = current_year();

        // Tolerate a render that straddles New Year's Eve
        assert!(
            html.contains(&copyright_notice(before)) || html.contains(&copyright_notice(after)),
            "{html}"
        );
    }
}
