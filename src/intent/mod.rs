//! Rule-based instruction understanding: vocabulary, minimality, form
//! fields, edit extraction and the classifier that combines them.

pub mod classifier;
pub mod edits;
pub mod fields;
pub mod minimality;
pub mod vocabulary;
