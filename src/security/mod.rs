//! Security: input sanitation and injection deny patterns.
//!
//! Runs before any classification. Tree-level whitelist and prop checks live
//! in [`crate::core::validator`].

pub mod injection;
pub mod input;
