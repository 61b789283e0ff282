use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::motion::Entrance;
use crate::navigation::{ScrollHost, Section, ABOUT_ANCHOR, CONTACT_ANCHOR, EXPERIENCE_ANCHOR};

use super::{
    browser::DocumentScroll,
    hooks::{use_mount_reveal, use_portfolio},
};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &use_portfolio().profile;
    let reveal = use_mount_reveal();
    let (_, scroll_y) = use_window_scroll();
    let parallax = move || reveal.motion().parallax(scroll_y.get());
    let scroll_to = |id: &'static str| {
        DocumentScroll.scroll_to_anchor(id);
    };

    view! {
        <section
            id=Section::Hero.anchor()
            class="min-h-screen flex items-center justify-center relative overflow-hidden px-4"
            aria-label="Hero section"
        >
            <div
                class="absolute inset-0 bg-gradient-to-br from-background via-background to-card"
                aria-hidden="true"
            ></div>

            <div
                class="absolute inset-0 overflow-hidden pointer-events-none"
                style=move || format!("transform: translateY({}px);", parallax().offset_y)
                aria-hidden="true"
            >
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

            <div
                class="relative z-10 max-w-4xl mx-auto text-center"
                style=move || format!("opacity: {};", parallax().opacity)
            >
                <div
                    class="inline-block mb-4 px-4 py-2 rounded-full border border-primary/30 bg-primary/5 backdrop-blur-sm"
                    style=move || reveal.style(Entrance::fade_up(-20.0))
                    role="status"
                    aria-label="Professional title"
                >
                    <span class="text-sm text-primary font-medium">{profile.role.as_str()}</span>
                </div>

                <h1
                    class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-foreground via-primary to-secondary bg-clip-text text-transparent"
                    style=move || reveal.style(Entrance::pop(0.9).duration_ms(800).delay_ms(200))
                >
                    {profile.name.as_str()}
                </h1>

                <p
                    class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-2xl mx-auto leading-relaxed"
                    style=move || {
                        reveal.style(Entrance::fade_up(20.0).duration_ms(800).delay_ms(400))
                    }
                >
                    {profile
                        .tagline
                        .iter()
                        .map(|span| match span.accent {
                            Some(accent) => {
                                Either::Left(
                                    view! { <span class=accent.class()>{span.text.as_str()}</span> },
                                )
                            }
                            None => Either::Right(span.text.as_str()),
                        })
                        .collect_view()}
                </p>

                <div
                    class="flex flex-wrap gap-4 justify-center mb-12"
                    style=move || {
                        reveal.style(Entrance::fade_up(20.0).duration_ms(800).delay_ms(600))
                    }
                    role="group"
                    aria-label="Call to action buttons"
                >
                    <button
                        type="button"
                        on:click=move |_| scroll_to(CONTACT_ANCHOR)
                        class="bg-gradient-to-r from-primary to-secondary hover:opacity-90 text-background font-semibold px-8 py-4 text-lg rounded-md shadow-lg hover:shadow-primary/50 transition-all"
                        aria-label="Scroll to contact section"
                    >
                        <span class="mr-2" aria-hidden="true">
                            "✉️"
                        </span>
                        "Get In Touch"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| scroll_to(EXPERIENCE_ANCHOR)
                        class="border border-primary/30 hover:bg-primary/10 backdrop-blur-sm px-8 py-4 text-lg rounded-md"
                        aria-label="Scroll to experience section"
                    >
                        "View Experience"
                    </button>
                </div>

                <nav
                    class="flex gap-6 justify-center"
                    style=move || reveal.style(Entrance::fade().delay_ms(800))
                    aria-label="Social media links"
                >
                    {profile
                        .socials
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let external = link.is_external();
                            view! {
                                <a
                                    href=link.href.as_str()
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class=move || {
                                        format!(
                                            "p-3 rounded-full border border-border hover:border-primary hover:bg-primary/10 transition-colors focus-visible:ring-2 focus-visible:ring-primary {}",
                                            reveal.hover("hover:scale-110 active:scale-90"),
                                        )
                                    }
                                    style=move || {
                                        reveal.style(Entrance::pop(0.0).delay_ms(900).stagger(i, 100))
                                    }
                                    aria-label=link.label.as_str()
                                >
                                    <span aria-hidden="true">{link.icon.glyph()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <button
                type="button"
                on:click=move |_| scroll_to(ABOUT_ANCHOR)
                class=move || {
                    format!(
                        "absolute bottom-8 left-1/2 -translate-x-1/2 bg-transparent p-2 rounded-full focus-visible:ring-2 focus-visible:ring-primary {}",
                        reveal.ambient("animate-bounce"),
                    )
                }
                aria-label="Scroll down to about section"
            >
                <div
                    class="w-6 h-10 border-2 border-primary/50 rounded-full flex items-start justify-center p-2"
                    aria-hidden="true"
                >
                    <div class=move || {
                        format!("w-1 h-3 bg-primary rounded-full {}", reveal.ambient("animate-pulse"))
                    }></div>
                </div>
            </button>
        </section>
    }
}
