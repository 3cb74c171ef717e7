//! Variant/size/rounding resolution for buttons and button-like links.

use crate::style::StyleKey;
use crate::util::class_merge::merge_classes;

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

/// Tokens shared by every control regardless of key selection.
pub const CONTROL_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap font-medium \
     transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 \
     disabled:opacity-50 disabled:cursor-not-allowed";

/// Visual treatment of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlVariant {
    /// Filled indigo. Default.
    #[default]
    Primary,
    Secondary,
    /// Bordered, transparent fill.
    Outline,
    /// No fill until hovered.
    Ghost,
    /// Destructive actions (delete listing, suspend user).
    Danger,
    /// Looks like inline text link.
    Link,
}

/// Control dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlSize {
    Sm,
    /// Default.
    #[default]
    Md,
    Lg,
    /// Square, for icon-only controls.
    Icon,
}

/// Corner rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    None,
    Sm,
    /// Default.
    #[default]
    Md,
    Lg,
    Full,
}

impl ControlVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-indigo-600 text-white hover:bg-indigo-500",
            Self::Secondary => "bg-gray-700 text-gray-100 hover:bg-gray-600",
            Self::Outline => "border border-gray-300 bg-transparent text-gray-900 hover:bg-gray-100",
            Self::Ghost => "bg-transparent text-gray-700 hover:bg-gray-100",
            Self::Danger => "bg-red-600 text-white hover:bg-red-500",
            Self::Link => "bg-transparent text-indigo-600 underline-offset-4 hover:underline",
        }
    }
}

impl ControlSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-sm",
            Self::Md => "h-10 px-4 py-2 text-sm",
            Self::Lg => "h-12 px-6 text-base",
            Self::Icon => "h-10 w-10 p-0",
        }
    }
}

impl Rounding {
    pub fn classes(self) -> &'static str {
        match self {
            Self::None => "rounded-none",
            Self::Sm => "rounded-sm",
            Self::Md => "rounded-md",
            Self::Lg => "rounded-lg",
            Self::Full => "rounded-full",
        }
    }
}

impl StyleKey for ControlVariant {
    const FAMILY: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
        Self::Link,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

impl StyleKey for ControlSize {
    const FAMILY: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Icon];

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl StyleKey for Rounding {
    const FAMILY: &'static str = "rounding";
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg, Self::Full];

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

key_conversions!(ControlVariant, ControlSize, Rounding);

/// Resolved key selection for one control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlStyle {
    pub variant: ControlVariant,
    pub size: ControlSize,
    pub rounding: Rounding,
}

impl ControlStyle {
    /// Build from raw keys, substituting defaults for anything unrecognized.
    pub fn from_keys(variant: &str, size: &str, rounding: &str) -> Self {
        Self {
            variant: variant.into(),
            size: size.into(),
            rounding: rounding.into(),
        }
    }

    /// Final class string. `overrides` are applied last and win any conflict.
    pub fn classes(&self, overrides: Option<&str>) -> String {
        merge_classes([
            CONTROL_BASE,
            self.variant.classes(),
            self.size.classes(),
            self.rounding.classes(),
            overrides.unwrap_or_default(),
        ])
    }
}
