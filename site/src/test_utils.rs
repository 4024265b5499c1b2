//! Markup inspection helpers for component tests.

/// Number of opening `<tag ...>` / `<tag>` elements in `html`.
pub fn count_tags(html: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter(|(at, _)| {
            matches!(
                html[at + open.len()..].chars().next(),
                Some(' ' | '>' | '/' | '\n')
            )
        })
        .count()
}

/// Visible text of the first anchor pointing at `href`, with SSR markers
/// (`<!>`, `<!-- -->`) and surrounding whitespace removed.
pub fn anchor_text(html: &str, href: &str) -> Option<String> {
    let attr = format!(r#"href="{href}""#);
    let after_attr = html.find(&attr)? + attr.len();
    let body_start = after_attr + html[after_attr..].find('>')? + 1;
    let body_end = body_start + html[body_start..].find("</a>")?;

    let text = html[body_start..body_end]
        .replace("<!-- -->", "")
        .replace("<!>", "");
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_exact_tag_names() {
        let html = r#"<a href="/">x</a><abbr>y</abbr><a>z</a>"#;
        assert_eq!(count_tags(html, "a"), 2);
        assert_eq!(count_tags(html, "abbr"), 1);
    }

    #[test]
    fn anchor_text_strips_markers() {
        let html = r#"<a href="/x" class="c">Hello<!> world</a><a href="/">Home</a>"#;
        assert_eq!(anchor_text(html, "/x").as_deref(), Some("Hello world"));
        assert_eq!(anchor_text(html, "/").as_deref(), Some("Home"));
        assert_eq!(anchor_text(html, "/missing"), None);
    }
}
