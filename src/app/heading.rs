use leptos::prelude::*;

use crate::motion::Entrance;

use super::hooks::Reveal;

/// Gradient section title with the short underline bar.
#[component]
pub fn SectionHeading(
    reveal: Reveal,
    title: &'static str,
    /// Tailwind `to-*` class ending the title gradient.
    gradient_to: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16" style=move || reveal.style(Entrance::fade_up(50.0))>
            <h2 class=format!(
                "text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-foreground {gradient_to} bg-clip-text text-transparent",
            )>{title}</h2>
            <div
                class="w-20 h-1 bg-gradient-to-r from-primary to-secondary mx-auto rounded-full mb-6"
                aria-hidden="true"
            ></div>
            {children.map(|children| children())}
        </div>
    }
}
