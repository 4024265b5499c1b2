//! Button primitive with shadcn-style variants.
//!
//! The button either renders its own `<button>` element or, when given an
//! [`AsChild`] slot, hands its styling to a wrapped [`Link`] and emits no
//! element of its own.

use super::Link;
use leptos::prelude::*;

const BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            ButtonVariant::Destructive => {
                "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"
            }
            ButtonVariant::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Height and padding of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 rounded-md px-3 text-xs",
            ButtonSize::Lg => "h-10 rounded-md px-8",
            ButtonSize::Icon => "h-9 w-9",
        }
    }
}

/// Full class list for a button with the given variant and size.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("{} {} {}", BASE_CLASS, variant.class(), size.class())
}

/// Render-as-child slot: the button's root becomes a link to `href`.
#[slot]
pub struct AsChild {
    #[prop(into)]
    href: String,
    children: ChildrenFn,
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Extra classes appended after the variant classes
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] as_child: Option<AsChild>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mut class_list = button_class(variant, size);
    if !class.is_empty() {
        class_list.push(' ');
        class_list.push_str(&class);
    }

    match as_child {
        Some(AsChild { href, children }) => view! {
            <Link href=href class=class_list>
                {children()}
            </Link>
        }
        .into_any(),
        None => view! {
            <button type="button" class=class_list>
                {children.map(|children| children())}
            </button>
        }
        .into_any(),
    }
}
