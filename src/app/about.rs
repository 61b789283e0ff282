use leptos::{html, prelude::*};

use crate::motion::Entrance;
use crate::navigation::Section;

use super::{
    heading::SectionHeading,
    hooks::{use_portfolio, use_section_reveal},
};

#[component]
pub fn About() -> impl IntoView {
    let about = &use_portfolio().about;
    let section = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section);

    view! {
        <section id=Section::About.anchor() node_ref=section class="py-20 px-4 relative" aria-label="About section">
            <div class="max-w-6xl mx-auto">
                <SectionHeading reveal title="About Me" gradient_to="to-primary" />

                <div class="grid md:grid-cols-2 gap-12 items-center mb-16">
                    <div
                        class="space-y-6"
                        style=move || reveal.style(Entrance::slide_x(-100.0).duration_ms(800).delay_ms(200))
                    >
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-muted-foreground leading-relaxed">{p.as_str()}</p>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div style=move || {
                        reveal.style(Entrance::slide_x(100.0).duration_ms(800).delay_ms(200))
                    }>
                        <div class="relative">
                            <div
                                class="absolute inset-0 bg-gradient-to-r from-primary to-secondary rounded-2xl blur-2xl opacity-20"
                                aria-hidden="true"
                            ></div>
                            <div class="relative bg-card border border-border rounded-2xl p-8 backdrop-blur-sm">
                                <h3 class="text-xl font-bold mb-6 text-primary">"Quick Facts"</h3>
                                <dl class="space-y-4">
                                    {about
                                        .quick_facts
                                        .iter()
                                        .map(|fact| {
                                            view! {
                                                <div class="flex justify-between items-center">
                                                    <dt class="text-muted-foreground">{fact.label.as_str()}</dt>
                                                    <dd class="font-semibold">{fact.value.as_str()}</dd>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    {about
                        .highlights
                        .iter()
                        .enumerate()
                        .map(|(i, highlight)| {
                            view! {
                                <div
                                    class="group relative"
                                    style=move || {
                                        reveal.style(Entrance::fade_up(50.0).delay_ms(400).stagger(i, 100))
                                    }
                                >
                                    <div
                                        class="absolute inset-0 bg-gradient-to-r from-primary/20 to-secondary/20 rounded-xl blur-xl group-hover:blur-2xl transition-all opacity-0 group-hover:opacity-100"
                                        aria-hidden="true"
                                    ></div>
                                    <div class=move || {
                                        format!(
                                            "relative bg-card border border-border rounded-xl p-6 hover:border-primary/50 transition-colors {}",
                                            reveal.hover("transition-transform hover:-translate-y-2"),
                                        )
                                    }>
                                        <div class="w-12 h-12 rounded-lg bg-gradient-to-br from-primary/20 to-secondary/20 flex items-center justify-center mb-4 text-2xl">
                                            <span aria-hidden="true">{highlight.icon.glyph()}</span>
                                        </div>
                                        <h3 class="text-xl font-bold mb-2">{highlight.title.as_str()}</h3>
                                        <p class="text-muted-foreground">{highlight.description.as_str()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
