//! Named stroke icons (Lucide paths).
//!
//! All icons use `stroke="currentColor"` so they inherit text colour from the
//! surrounding control. Default size is `h-4 w-4`; override with `class`.

use leptos::prelude::*;

use crate::style::{StyleKey, key_conversions};
use crate::util::class_merge::merge_classes;

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

const ICON_BASE: &str = "h-4 w-4 shrink-0";

/// Icon glyphs available to the kit. Unknown names render [`IconName::Image`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconName {
    ChevronDown,
    ChevronLeft,
    Close,
    User,
    Plus,
    Search,
    Sun,
    Moon,
    Home,
    #[default]
    Image,
}

impl IconName {
    /// SVG path data on a 24x24 view box.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::ChevronLeft => &["m15 18-6-6 6-6"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
            ],
            Self::Plus => &["M5 12h14", "M12 5v14"],
            Self::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0", "m21 21-4.3-4.3"],
            Self::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Home => &[
                "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
                "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            ],
            Self::Image => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M11 9a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
                "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
            ],
        }
    }
}

impl StyleKey for IconName {
    const FAMILY: &'static str = "icon";
    const ALL: &'static [Self] = &[
        Self::ChevronDown,
        Self::ChevronLeft,
        Self::Close,
        Self::User,
        Self::Plus,
        Self::Search,
        Self::Sun,
        Self::Moon,
        Self::Home,
        Self::Image,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronLeft => "chevron-left",
            Self::Close => "close",
            Self::User => "user",
            Self::Plus => "plus",
            Self::Search => "search",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Home => "home",
            Self::Image => "image",
        }
    }
}

key_conversions!(IconName);

/// Decorative SVG icon; hidden from assistive technology.
#[component]
pub fn Icon(#[prop(optional, into)] name: IconName, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let classes = merge_classes([ICON_BASE, class.as_deref().unwrap_or_default()]);

    view! {
        <svg
            class=classes
            data-icon=name.key()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            {name.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
