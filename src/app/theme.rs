use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::motion::{Easing, Entrance};
use crate::preferences::{Theme, ThemeCodec, THEME_KEY};

use super::{browser, hooks::use_motion_policy};

/// Page-wide theme flag. Toggling is the only write path.
#[derive(Debug, Clone, Copy)]
pub struct ThemeHandle {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeHandle {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme.set(self.theme.get_untracked().toggled());
    }
}

pub fn provide_theme() -> ThemeHandle {
    // the server renders the default; the stored theme lands after hydration
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, ThemeCodec>(
        THEME_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    Effect::new(move |_| browser::apply_theme(theme.get()));

    let handle = ThemeHandle { theme, set_theme };
    provide_context(handle);
    handle
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let motion = use_motion_policy();
    let icon = Entrance::pop(0.0).duration_ms(300).easing(Easing::EaseInOut);
    let icon_style = move |active: bool| motion.get().presence(&icon, active).style();

    view! {
        <button
            type="button"
            on:click=move |_| theme.toggle()
            class="relative flex items-center justify-center w-10 h-10 rounded-full border border-border/30 hover:border-primary/40 hover:bg-primary/10 transition-all duration-300"
            aria-label=move || format!("Switch to {} mode", theme.get().toggled())
        >
            <span
                class="absolute text-lg text-primary"
                aria-hidden="true"
                style=move || icon_style(theme.get().is_dark())
            >
                "🌙"
            </span>
            <span
                class="absolute text-lg text-orange-500"
                aria-hidden="true"
                style=move || icon_style(!theme.get().is_dark())
            >
                "☀️"
            </span>
        </button>
    }
}
