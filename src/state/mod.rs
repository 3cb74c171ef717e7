//! Per-instance UI state machines.
//!
//! DESIGN
//! ======
//! Each struct is plain `Copy`/`Clone` data stored in a component-owned
//! `RwSignal`. Derived attributes (ARIA flags, visibility) are computed from
//! the single stored field so they cannot drift apart.

pub mod avatar_image;
pub mod disclosure;
