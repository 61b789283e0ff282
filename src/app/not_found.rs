use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_location};

use crate::analytics::track_not_found;
use crate::motion::Entrance;

use super::{browser, hooks::use_mount_reveal};

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_not_found_status() {}

/// Fallback for any path the router doesn't know.
#[component]
pub fn NotFound() -> impl IntoView {
    set_not_found_status();
    let reveal = use_mount_reveal();
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        log::debug!("no route for {path}");
        track_not_found(browser::analytics_sink().as_deref(), &path);
    });

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center bg-background text-foreground px-4 relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class=move || {
                    format!(
                        "absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl {}",
                        reveal.ambient("animate-blob"),
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute bottom-1/4 right-1/4 w-96 h-96 bg-secondary/10 rounded-full blur-3xl {}",
                        reveal.ambient("animate-blob-reverse"),
                    )
                }></div>
            </div>

            <div class="relative z-10 text-center">
                <h1
                    class="text-9xl font-bold mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
                    style=move || reveal.style(Entrance::pop(0.5).duration_ms(500))
                >
                    "404"
                </h1>
                <div style=move || reveal.style(Entrance::fade_up(20.0).delay_ms(200))>
                    <h2 class="text-3xl font-bold mb-4">"Page Not Found"</h2>
                    <p class="text-xl text-muted-foreground mb-8 max-w-md mx-auto">
                        "Oops! The page you're looking for doesn't exist or has been moved."
                    </p>
                </div>
                <div
                    class="flex flex-wrap gap-4 justify-center"
                    style=move || reveal.style(Entrance::fade_up(20.0).delay_ms(400))
                >
                    <A href="/">
                        <span class="inline-flex items-center bg-gradient-to-r from-primary to-secondary hover:opacity-90 text-background font-semibold px-6 py-3 rounded-md">
                            <span class="mr-2" aria-hidden="true">
                                "🏠"
                            </span>
                            "Back to Home"
                        </span>
                    </A>
                    <button
                        type="button"
                        on:click=move |_| browser::go_back()
                        class="inline-flex items-center border border-primary/30 hover:bg-primary/10 px-6 py-3 rounded-md"
                    >
                        <span class="mr-2" aria-hidden="true">
                            "←"
                        </span>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
