//! Outbound interfaces.
//!
//! Only the contact submission seam lives here; the stand-in implementation
//! performs no real I/O, and a production submitter replaces it behind the
//! same signature.

pub mod submit;
