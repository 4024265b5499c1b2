use leptos::prelude::*;

/// Anchor for in-site navigation.
///
/// Rendered as a plain `<a>`; inside the browser app the `Router` picks up
/// clicks on same-origin anchors and navigates without a page load.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    match class {
        Some(class) => view! {
            <a href=href class=class>
                {children()}
            </a>
        }
        .into_any(),
        None => view! { <a href=href>{children()}</a> }.into_any(),
    }
}
