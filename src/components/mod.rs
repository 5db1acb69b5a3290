//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod contact_form;
pub mod faq;
pub mod header;
pub mod hero;
pub mod listings;
pub mod mobile_menu;
pub mod scroll_indicator;
pub mod theme_toggle;
