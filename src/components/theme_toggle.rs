//! Light/dark theme switch backed by [`UiPreferences`].
//!
//! Renders from `UiPreferences::default()` on both server and client so
//! hydration sees identical markup; the stored preference is read in an
//! effect, which only runs in the browser after hydration.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::icon::{Icon, IconName};
use crate::config::UiPreferences;
use crate::style::control::{ControlSize, ControlVariant, Rounding};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Icon button that flips and persists the dark-mode preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefs = RwSignal::new(UiPreferences::default());

    Effect::new(move || {
        let stored = UiPreferences::load();
        stored.apply();
        prefs.set(stored);
    });

    let on_click = Callback::new(move |_: leptos::ev::MouseEvent| {
        prefs.update(|p| {
            p.toggle_dark_mode();
        });
        let current = prefs.get_untracked();
        current.apply();
        current.save_or_log();
    });

    view! {
        <Button
            variant=ControlVariant::Ghost
            size=ControlSize::Icon
            rounding=Rounding::Full
            aria_label="Toggle dark mode"
            on_click=on_click
        >
            {move || {
                let name = if prefs.get().dark_mode { IconName::Sun } else { IconName::Moon };
                view! { <Icon name=name /> }
            }}
        </Button>
    }
}
