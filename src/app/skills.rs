use leptos::{html, prelude::*};

use crate::motion::Entrance;
use crate::navigation::Section;

use super::{
    heading::SectionHeading,
    hooks::{use_portfolio, use_section_reveal},
};

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &use_portfolio().skills;
    let section = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section);

    view! {
        <section
            id=Section::Skills.anchor()
            node_ref=section
            class="py-20 px-4 relative bg-card/30"
            aria-label="Skills section"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading reveal title="Skills & Expertise" gradient_to="to-secondary" />

                <div class="grid md:grid-cols-3 gap-8 mb-16">
                    {skills
                        .categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div
                                    class="bg-card border border-border rounded-xl p-6 hover:border-primary/50 transition-colors"
                                    style=move || {
                                        reveal.style(Entrance::fade_up(50.0).delay_ms(200).stagger(i, 100))
                                    }
                                >
                                    <h3 class="text-xl font-bold mb-6 text-primary">
                                        {category.category.as_str()}
                                    </h3>
                                    <ul class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(j, skill)| {
                                                let delay = 500 + i as u32 * 100 + j as u32 * 50;
                                                let level = skill.level;
                                                view! {
                                                    <li>
                                                        <div class="flex justify-between mb-2">
                                                            <span class="text-sm font-medium">{skill.name.as_str()}</span>
                                                            <span
                                                                class="text-sm text-muted-foreground"
                                                                style=move || {
                                                                    reveal.style(Entrance::fade().delay_ms(delay))
                                                                }
                                                            >
                                                                {format!("{level}%")}
                                                            </span>
                                                        </div>
                                                        <div
                                                            class="h-2 bg-muted rounded-full overflow-hidden"
                                                            role="progressbar"
                                                            aria-valuenow=level.to_string()
                                                            aria-valuemin="0"
                                                            aria-valuemax="100"
                                                            aria-label=format!("{} proficiency", skill.name)
                                                        >
                                                            <div
                                                                class="h-full bg-gradient-to-r from-primary to-secondary rounded-full"
                                                                style=move || reveal.bar_style(level, delay)
                                                            ></div>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <div
                        class="bg-card border border-border rounded-xl p-8"
                        style=move || reveal.style(Entrance::slide_x(-50.0).delay_ms(600))
                    >
                        <h3 class="text-2xl font-bold mb-6 text-primary">"Soft Skills"</h3>
                        <div class="flex flex-wrap gap-3">
                            {skills
                                .soft_skills
                                .iter()
                                .enumerate()
                                .map(|(i, soft)| {
                                    view! {
                                        <span
                                            class=move || {
                                                format!(
                                                    "px-4 py-2 rounded-full text-sm font-medium border bg-gradient-to-r {} {}",
                                                    soft.tone.class(),
                                                    reveal.hover("transition-transform hover:scale-105"),
                                                )
                                            }
                                            style=move || {
                                                reveal
                                                    .style(Entrance::pop(0.0).duration_ms(300).delay_ms(700).stagger(i, 50))
                                            }
                                        >
                                            {soft.name.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class="bg-card border border-border rounded-xl p-8"
                        style=move || reveal.style(Entrance::slide_x(50.0).delay_ms(600))
                    >
                        <h3 class="text-2xl font-bold mb-6 text-secondary">"Languages"</h3>
                        <ul class="space-y-4">
                            {skills
                                .languages
                                .iter()
                                .enumerate()
                                .map(|(i, language)| {
                                    view! {
                                        <li
                                            class="flex justify-between items-center p-4 rounded-lg bg-muted/50"
                                            style=move || {
                                                reveal.style(Entrance::pop(0.8).delay_ms(900).stagger(i, 100))
                                            }
                                        >
                                            <span class="font-semibold">{language.name.as_str()}</span>
                                            <span class="text-sm text-muted-foreground">
                                                {language.level.as_str()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
