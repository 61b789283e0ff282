use leptos::{html, prelude::*};

use crate::content::{Education, Icon, Job};
use crate::motion::Entrance;
use crate::navigation::Section;

use super::{
    heading::SectionHeading,
    hooks::{use_portfolio, use_section_reveal, Reveal},
};

#[component]
pub fn Experience() -> impl IntoView {
    let experience = &use_portfolio().experience;
    let section = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section);

    view! {
        <section
            id=Section::Experience.anchor()
            node_ref=section
            class="py-20 px-4 relative"
            aria-label="Experience section"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading reveal title="Experience & Education" gradient_to="to-accent" />

                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <TimelineHeading reveal icon=Icon::Briefcase title="Work Experience" />
                        <div class="space-y-8">
                            {experience
                                .jobs
                                .iter()
                                .enumerate()
                                .map(|(i, job)| view! { <JobCard reveal job index=i /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <TimelineHeading reveal icon=Icon::GraduationCap title="Education" />
                        <div class="space-y-8">
                            {experience
                                .education
                                .iter()
                                .enumerate()
                                .map(|(i, education)| view! { <EducationCard reveal education index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineHeading(reveal: Reveal, icon: Icon, title: &'static str) -> impl IntoView {
    view! {
        <h3
            class="text-2xl font-bold mb-8 flex items-center gap-3"
            style=move || reveal.style(Entrance::slide_x(-50.0))
        >
            <span
                class="w-10 h-10 rounded-lg bg-gradient-to-br from-primary to-secondary flex items-center justify-center text-lg"
                aria-hidden="true"
            >
                {icon.glyph()}
            </span>
            {title}
        </h3>
    }
}

#[component]
fn JobCard(reveal: Reveal, job: &'static Job, index: usize) -> impl IntoView {
    view! {
        <article
            class="relative pl-8 border-l-2 border-primary/30"
            style=move || reveal.style(Entrance::slide_x(-100.0).delay_ms(300).stagger(index, 200))
        >
            <div
                class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-primary border-4 border-background"
                aria-hidden="true"
            ></div>
            <div class=move || {
                format!(
                    "bg-card border border-border rounded-xl p-6 hover:border-primary/50 transition-colors {}",
                    reveal.hover("transition-transform hover:translate-x-2"),
                )
            }>
                <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                    <h4 class="text-xl font-bold text-primary">{job.title.as_str()}</h4>
                    <span class="px-3 py-1 text-xs rounded-full bg-secondary/20 text-secondary border border-secondary/30">
                        {job.kind.as_str()}
                    </span>
                </div>
                <p class="font-semibold mb-1">{job.company.as_str()}</p>
                <p class="text-sm text-muted-foreground mb-4">
                    <time>{job.period.as_str()}</time>
                </p>
                <p class="text-muted-foreground mb-4">{job.description.as_str()}</p>
                <ul class="space-y-2">
                    {job
                        .highlights
                        .iter()
                        .map(|line| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-muted-foreground">
                                    <span class="text-primary mt-1" aria-hidden="true">
                                        "▹"
                                    </span>
                                    {line.as_str()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}

#[component]
fn EducationCard(reveal: Reveal, education: &'static Education, index: usize) -> impl IntoView {
    view! {
        <article
            class="relative pl-8 border-l-2 border-secondary/30"
            style=move || reveal.style(Entrance::slide_x(100.0).delay_ms(800).stagger(index, 200))
        >
            <div
                class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-secondary border-4 border-background"
                aria-hidden="true"
            ></div>
            <div class=move || {
                format!(
                    "bg-card border border-border rounded-xl p-6 hover:border-secondary/50 transition-colors {}",
                    reveal.hover("transition-transform hover:translate-x-2"),
                )
            }>
                <h4 class="text-xl font-bold text-secondary mb-2">{education.degree.as_str()}</h4>
                <p class="font-semibold mb-1">{education.institution.as_str()}</p>
                <p class="text-sm text-muted-foreground mb-2">
                    <time>{education.period.as_str()}</time>
                </p>
                <p class="text-sm text-muted-foreground">{education.specialization.as_str()}</p>
            </div>
        </article>
    }
}
