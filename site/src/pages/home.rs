// Home page - landing view with the demo button
use crate::components::Button;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    // Placeholder button: no target, no handler.
    view! {
        <div class="flex min-h-screen items-center justify-center bg-background text-foreground">
            <Button>"Test Shadcn Button"</Button>
        </div>
    }
}
