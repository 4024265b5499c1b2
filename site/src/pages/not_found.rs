// Fallback for paths without a page
use crate::components::{AsChild, Button, ButtonVariant};
use crate::routes::SiteRoute;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[60vh] flex-col items-center justify-center gap-4 bg-background text-foreground">
            <h1 class="text-4xl font-semibold tracking-tight">"404"</h1>
            <p class="text-sm text-muted-foreground">"Page not found."</p>
            <Button variant=ButtonVariant::Outline>
                <AsChild slot href=SiteRoute::Home.path()>"Back to home"</AsChild>
            </Button>
        </div>
    }
}
