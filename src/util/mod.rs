//! Utility helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept free of Leptos types so the resolvers built on top of them stay
//! testable without a reactive runtime.

pub mod class_merge;
