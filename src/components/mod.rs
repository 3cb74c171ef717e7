//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wire the pure resolvers in `style` and `state` to markup. Each
//! owns its local signals; none reads shared context except `BackLink`,
//! which needs the router.

pub mod accordion;
pub mod avatar;
pub mod back_link;
pub mod button;
pub mod icon;
pub mod theme_toggle;

#[cfg(all(test, feature = "ssr"))]
#[path = "markup_test.rs"]
pub(crate) mod markup_test;
