use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_media_query, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::config::SiteSettings;
use crate::content::Portfolio;
use crate::motion::{Entrance, MotionPolicy};
use crate::visibility::{RootMargin, SectionVisibility};

use super::browser;

pub fn use_portfolio() -> &'static Portfolio {
    expect_context::<&'static Portfolio>()
}

/// Follows the OS reduced-motion setting for the whole session.
pub fn use_motion_policy() -> Signal<MotionPolicy> {
    let reduce = use_media_query("(prefers-reduced-motion: reduce)");
    Signal::derive(move || MotionPolicy::new(reduce.get()))
}

/// False during server render and the first client pass, true after mount.
pub fn use_mounted() -> Signal<bool> {
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));
    mounted.read_only().into()
}

/// True from the first time `target` intersects the viewport (shrunk or
/// grown by `margin`) until the component is dropped.
pub fn use_reveal(target: NodeRef<html::Section>, margin: RootMargin) -> Signal<bool> {
    let seen = RwSignal::new(false);
    let visibility = SectionVisibility::new(margin);
    let root_margin = visibility.margin().to_string();
    let state = StoredValue::new(visibility);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if state
                .try_update_value(|s| s.observe_entry(intersecting))
                .unwrap_or(false)
            {
                seen.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(root_margin),
    );

    // sections already on screen at mount shouldn't wait on the observer
    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        if state.with_value(SectionVisibility::has_been_seen) {
            return;
        }
        let Some((rect, viewport)) = browser::measure(&el) else {
            return;
        };
        if state
            .try_update_value(|s| s.observe_rect(&rect, &viewport))
            .unwrap_or(false)
        {
            seen.set(true);
        }
    });

    Effect::watch(
        move || seen.get(),
        move |seen, _, _| {
            if *seen {
                stop();
            }
        },
        false,
    );

    seen.read_only().into()
}

/// Motion policy paired with a reveal trigger; turns entrances into styles.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    motion: Signal<MotionPolicy>,
    seen: Signal<bool>,
}

impl Reveal {
    pub fn motion(self) -> MotionPolicy {
        self.motion.get()
    }

    pub fn style(self, entrance: Entrance) -> String {
        self.motion.get().frame(&entrance, self.seen.get()).style()
    }

    pub fn bar_style(self, level: u8, delay_ms: u32) -> String {
        self.motion.get().bar(level, self.seen.get(), delay_ms).style()
    }

    pub fn hover(self, class: &'static str) -> &'static str {
        self.motion.get().hover(class)
    }

    pub fn ambient(self, class: &'static str) -> &'static str {
        self.motion.get().ambient(class)
    }
}

/// Reveal when the section scrolls into view.
pub fn use_section_reveal(target: NodeRef<html::Section>) -> Reveal {
    let margin = use_context::<SiteSettings>()
        .map(|site| site.reveal_margin())
        .unwrap_or_default();
    Reveal {
        motion: use_motion_policy(),
        seen: use_reveal(target, margin),
    }
}

/// Reveal as soon as the component mounts, for content above the fold.
pub fn use_mount_reveal() -> Reveal {
    Reveal {
        motion: use_motion_policy(),
        seen: use_mounted(),
    }
}
