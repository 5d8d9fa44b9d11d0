//! uiplan: deterministic instruction-to-UI-plan compiler.
//!
//! Rule-based intent classification, whitelisted template synthesis,
//! edit-mode patching and structural diffs. Same input, same tree.

pub mod cli;
pub mod core;
pub mod intent;
pub mod security;
pub mod templates;
