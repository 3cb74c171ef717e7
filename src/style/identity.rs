//! Avatar sizing and initials derivation for display identities.

use crate::style::StyleKey;
use crate::util::class_merge::merge_classes;

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Shown when neither image nor name yields visible content.
pub const DEFAULT_FALLBACK: char = '?';

/// Maximum characters in an initials label.
const MAX_INITIALS: usize = 2;

const AVATAR_BASE: &str = "relative inline-flex shrink-0 items-center justify-center overflow-hidden rounded-full \
     bg-gray-200 font-medium text-gray-700 select-none";

/// Avatar dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 w-8 text-xs",
            Self::Md => "h-10 w-10 text-sm",
            Self::Lg => "h-14 w-14 text-base",
            Self::Xl => "h-20 w-20 text-xl",
        }
    }
}

impl StyleKey for AvatarSize {
    const FAMILY: &'static str = "avatar size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

key_conversions!(AvatarSize);

/// Avatar container classes with caller overrides applied last.
pub fn avatar_classes(size: AvatarSize, overrides: Option<&str>) -> String {
    merge_classes([AVATAR_BASE, size.classes(), overrides.unwrap_or_default()])
}

/// Uppercase initials of the first two whitespace-separated tokens of `name`,
/// at most two characters.
///
/// Falls back to `fallback` when the name is absent or blank. A whitespace
/// fallback is replaced by [`DEFAULT_FALLBACK`] so the label is never blank.
pub fn initials(name: Option<&str>, fallback: char) -> String {
    let label: String = name
        .unwrap_or_default()
        .split_whitespace()
        .take(MAX_INITIALS)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect();

    if !label.is_empty() {
        return label;
    }
    if fallback.is_whitespace() || fallback.is_control() {
        DEFAULT_FALLBACK.to_string()
    } else {
        fallback.to_string()
    }
}
