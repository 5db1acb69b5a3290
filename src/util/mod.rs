//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. Every browser call is
//! `hydrate`-gated and degrades to a no-op when its target is absent.

pub mod anim;
pub mod rate_limit;
pub mod scroll;
pub mod theme;
pub mod validate;
pub mod viewport;
