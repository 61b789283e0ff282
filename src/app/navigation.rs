use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::motion::Entrance;
use crate::navigation::{follow_link, Menu, HERO_ANCHOR, NAV_LINKS};

use super::{
    browser::DocumentScroll,
    hooks::{use_mount_reveal, use_portfolio},
    theme::ThemeToggle,
};

#[component]
pub fn Navigation() -> impl IntoView {
    let portfolio = use_portfolio();
    let reveal = use_mount_reveal();
    let menu = RwSignal::new(Menu::default());
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > 50.0;

    let go = move |id: &'static str| {
        menu.update(|m| {
            follow_link(m, &DocumentScroll, id);
        });
    };

    view! {
        <nav
            class=move || {
                format!(
                    "fixed top-0 left-0 right-0 z-40 transition-colors duration-300 backdrop-blur-xl border-b {}",
                    if scrolled() {
                        "bg-background/95 border-border/30 shadow-lg shadow-primary/5"
                    } else {
                        "bg-background/60 border-transparent"
                    },
                )
            }
            style=move || reveal.style(Entrance::fade_up(-100.0))
            aria-label="Main navigation"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        on:click=move |_| go(HERO_ANCHOR)
                        class=move || {
                            format!(
                                "flex items-center gap-2 text-xl font-bold bg-gradient-to-r from-primary via-secondary to-accent bg-clip-text text-transparent hover:opacity-80 transition {}",
                                reveal.hover("hover:scale-105 active:scale-95"),
                            )
                        }
                        aria-label="Scroll to top"
                    >
                        <span class="text-primary" aria-hidden="true">
                            "✦"
                        </span>
                        {portfolio.profile.initials.as_str()}
                    </button>

                    <div class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| go(link.id)
                                        class="text-sm font-semibold text-muted-foreground hover:text-foreground transition-colors relative group px-2 py-1"
                                        style=move || {
                                            reveal.style(Entrance::fade_up(-10.0).duration_ms(300).stagger(i, 100))
                                        }
                                        aria-label=format!("Navigate to {}", link.label)
                                    >
                                        {link.label}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-primary via-secondary to-accent group-hover:w-full transition-all duration-300 rounded-full"></span>
                                    </button>
                                }
                            })
                            .collect_view()}
                        <div
                            class="w-px h-6 bg-gradient-to-b from-transparent via-border to-transparent"
                            aria-hidden="true"
                        ></div>
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            on:click=move |_| menu.update(Menu::toggle)
                            class="w-10 h-10 rounded-md text-xl hover:bg-primary/10"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <div
                class=move || {
                    format!(
                        "md:hidden overflow-hidden bg-background/95 backdrop-blur-lg border-t border-border/50 {} {}",
                        reveal.hover("transition-all duration-300"),
                        if menu.get().is_open() { "max-h-96 opacity-100" } else { "max-h-0 opacity-0" },
                    )
                }
                aria-hidden=move || (!menu.get().is_open()).to_string()
            >
                <div class="px-4 py-6 space-y-3">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| go(link.id)
                                    class="block w-full text-left px-5 py-3 text-base font-semibold text-muted-foreground hover:text-foreground hover:bg-primary/10 rounded-xl transition-colors border border-transparent hover:border-primary/20"
                                    aria-label=format!("Navigate to {}", link.label)
                                >
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
