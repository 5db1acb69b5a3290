//! Explicit component-local state.
//!
//! DESIGN
//! ======
//! Visual state (theme classes, menu markers, accordion heights, field
//! errors) is always derived from these values, never read back from the
//! rendered DOM, so logical and visual state cannot drift apart.

pub mod contact_form;
pub mod faq;
pub mod menu;
pub mod theme;
