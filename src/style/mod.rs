//! Pure style resolvers mapping closed key sets to class tokens.
//!
//! DESIGN
//! ======
//! Every key family is a `Copy` enum whose `#[default]` variant is the
//! documented fallback. Components accept either the enum or a raw string;
//! raw strings go through [`StyleKey::from_key_or_default`], so a typo in
//! markup degrades to the default look instead of failing to render.

use crate::error::StyleKeyError;

/// Implements strict `FromStr`, lenient `From<&str>` and `Display` for a
/// [`StyleKey`] enum.
macro_rules! key_conversions {
    ($($ty:ty),* $(,)?) => {$(
        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::StyleKeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::style::StyleKey>::parse_key(s)
            }
        }

        impl From<&str> for $ty {
            fn from(raw: &str) -> Self {
                <Self as $crate::style::StyleKey>::from_key_or_default(raw)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::style::StyleKey::key(*self))
            }
        }
    )*};
}

pub(crate) use key_conversions;

pub mod control;
pub mod identity;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// A closed family of style keys with a documented default.
pub trait StyleKey: Copy + Default + PartialEq + 'static {
    /// Family name used in diagnostics (`variant`, `size`, ...).
    const FAMILY: &'static str;
    /// Every member of the family, in declaration order.
    const ALL: &'static [Self];

    /// Canonical lowercase key.
    fn key(self) -> &'static str;

    /// Strict lookup. Keys are matched case-insensitively after trimming.
    fn parse_key(raw: &str) -> Result<Self, StyleKeyError> {
        let wanted = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleKeyError::Unknown { family: Self::FAMILY, key: raw.to_owned() })
    }

    /// Lenient lookup: unknown keys resolve to the family default.
    fn from_key_or_default(raw: &str) -> Self {
        Self::parse_key(raw).unwrap_or_else(|e| {
            log::debug!("{e}; using default {:?}", Self::default().key());
            Self::default()
        })
    }
}
