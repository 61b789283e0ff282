use leptos::prelude::*;

use crate::motion::Entrance;

use super::hooks::use_mount_reveal;

/// Full-screen splash shown until the initial delay runs out.
#[component]
pub fn PageLoader() -> impl IntoView {
    let reveal = use_mount_reveal();

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-background"
            role="status"
            aria-live="polite"
            aria-label="Loading portfolio"
        >
            <div class="text-center">
                <div class="relative w-24 h-24 mx-auto mb-8" aria-hidden="true">
                    <div class="absolute inset-0 rounded-full border-4 border-primary/20"></div>
                    <div class=move || {
                        format!(
                            "absolute inset-0 rounded-full border-4 border-transparent border-t-primary border-r-secondary {}",
                            reveal.ambient("animate-spin"),
                        )
                    }></div>
                    <div class=move || {
                        format!(
                            "absolute inset-3 rounded-full bg-gradient-to-br from-primary/20 to-secondary/20 {}",
                            reveal.ambient("animate-pulse"),
                        )
                    }></div>
                </div>
                <p
                    class="text-lg font-semibold bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
                    style=move || reveal.style(Entrance::fade_up(20.0).delay_ms(200))
                >
                    "Loading Portfolio..."
                </p>
            </div>
        </div>
    }
}
