use leptos::{either::Either, html, prelude::*};

use crate::content::ContactMethod;
use crate::motion::Entrance;
use crate::navigation::Section;

use super::{
    heading::SectionHeading,
    hooks::{use_portfolio, use_section_reveal, Reveal},
};

#[component]
pub fn Contact() -> impl IntoView {
    let portfolio = use_portfolio();
    let contact = &portfolio.contact;
    let section = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section);

    view! {
        <section
            id=Section::Contact.anchor()
            node_ref=section
            class="py-20 px-4 relative bg-card/30"
            aria-label="Contact section"
        >
            <div class="max-w-4xl mx-auto">
                <SectionHeading reveal title="Get In Touch" gradient_to="to-primary">
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        {contact.intro.as_str()}
                    </p>
                </SectionHeading>

                <div class="grid md:grid-cols-3 gap-6 mb-12">
                    {contact
                        .methods
                        .iter()
                        .enumerate()
                        .map(|(i, method)| view! { <MethodCard reveal method index=i /> })
                        .collect_view()}
                </div>

                <div class="text-center" style=move || reveal.style(Entrance::fade_up(30.0).delay_ms(600))>
                    <div class="relative inline-block">
                        <div
                            class="absolute inset-0 bg-gradient-to-r from-primary to-secondary rounded-2xl blur-2xl opacity-30"
                            aria-hidden="true"
                        ></div>
                        <div class="relative bg-card border border-border rounded-2xl p-8 backdrop-blur-sm">
                            <h3 class="text-2xl font-bold mb-4">"Ready to collaborate?"</h3>
                            <p class="text-muted-foreground mb-6">
                                "Let's discuss how I can contribute to your team's success"
                            </p>
                            <a
                                href=contact.cta_href()
                                class="inline-flex items-center bg-gradient-to-r from-primary to-secondary hover:opacity-90 text-background font-semibold px-8 py-4 text-lg rounded-md shadow-lg hover:shadow-primary/50 transition-all"
                            >
                                <span class="mr-2" aria-hidden="true">
                                    "✉️"
                                </span>
                                "Send Email"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <footer
                class="mt-20 pt-8 border-t border-border text-center text-muted-foreground"
                style=move || reveal.style(Entrance::fade().delay_ms(800))
            >
                <p>
                    {format!("© {} {}. {}", contact.copyright_year(), contact.owner, portfolio.site.footer)}
                </p>
            </footer>
        </section>
    }
}

#[component]
fn MethodCard(reveal: Reveal, method: &'static ContactMethod, index: usize) -> impl IntoView {
    let class = move || {
        format!(
            "group relative block {}",
            reveal.hover("transition-transform hover:-translate-y-1"),
        )
    };
    let style = move || reveal.style(Entrance::fade_up(50.0).delay_ms(200).stagger(index, 100));
    let body = view! {
        <div
            class="absolute inset-0 bg-gradient-to-r from-primary/20 to-secondary/20 rounded-xl blur-xl group-hover:blur-2xl transition-all opacity-0 group-hover:opacity-100"
            aria-hidden="true"
        ></div>
        <div class="relative bg-card border border-border rounded-xl p-6 text-center hover:border-primary/50 transition-colors">
            <div class="w-12 h-12 rounded-full bg-gradient-to-br from-primary to-secondary flex items-center justify-center mx-auto mb-4 text-xl">
                <span aria-hidden="true">{method.icon().glyph()}</span>
            </div>
            <h3 class="font-semibold mb-2">{method.label.as_str()}</h3>
            <p class="text-sm text-muted-foreground break-all">{method.value.as_str()}</p>
        </div>
    };

    match method.href() {
        Some(href) => {
            Either::Left(
                view! {
                    <a
                        href=href
                        class=class
                        style=style
                        aria-label=format!("{}: {}", method.label, method.value)
                    >
                        {body}
                    </a>
                },
            )
        }
        None => {
            Either::Right(
                view! {
                    <div class=class style=style>
                        {body}
                    </div>
                },
            )
        }
    }
}
