use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteSettings;
use crate::loader::{LoadPhase, Splash};
use crate::navigation::{Section, SECTION_ORDER};

use super::{
    about::About, contact::Contact, experience::Experience, hero::Hero, hooks::use_motion_policy,
    hooks::use_portfolio, loader::PageLoader, navigation::Navigation, skills::Skills,
};

/// The whole landing page: splash first, then the sections in page order.
#[component]
pub fn IndexPage() -> impl IntoView {
    let portfolio = use_portfolio();
    let site = expect_context::<SiteSettings>();
    let motion = use_motion_policy();
    let splash = RwSignal::new(Splash::new(site.splash_delay()));
    let delay = splash.with_untracked(Splash::delay);

    // cleared automatically if the page unmounts first
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let phase = splash.try_update(|s| s.elapse(delay));
            if phase == Some(LoadPhase::Loaded) {
                log::debug!("splash finished after {delay:?}");
            }
        },
        delay.as_millis() as f64,
    );
    start(());

    let loading = move || splash.with(Splash::is_loading);

    view! {
        <Title text=portfolio.profile.role.clone() />
        <Show when=loading>
            <PageLoader />
        </Show>
        <div
            class=move || {
                format!(
                    "min-h-screen bg-background text-foreground {}",
                    motion.get().ambient("transition-opacity duration-500"),
                )
            }
            style=move || if loading() { "opacity: 0;" } else { "opacity: 1;" }
            inert=move || splash.with(Splash::content_inert)
            aria-busy=move || loading().to_string()
        >
            <Navigation />
            <main>{SECTION_ORDER.into_iter().filter_map(section_view).collect_view()}</main>
        </div>
    }
}

fn section_view(section: Section) -> Option<AnyView> {
    match section {
        // rendered as the fixed header, outside <main>
        Section::Navigation => None,
        Section::Hero => Some(view! { <Hero /> }.into_any()),
        Section::About => Some(view! { <About /> }.into_any()),
        Section::Skills => Some(view! { <Skills /> }.into_any()),
        Section::Experience => Some(view! { <Experience /> }.into_any()),
        Section::Contact => Some(view! { <Contact /> }.into_any()),
    }
}
