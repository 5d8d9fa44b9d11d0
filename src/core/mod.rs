//! Core plan logic: types, schema conversion, validation, ids, diffing,
//! patching and the planning pipeline.

pub mod config;
pub mod differ;
pub mod error;
pub mod fingerprint;
pub mod ids;
pub mod patcher;
pub mod pipeline;
pub mod schema;
pub mod types;
pub mod validator;
