//! Style hook: declaration values, their tokenizer, and property
//! interpretation.

pub mod properties;
pub mod tokenizer;
pub mod value;

pub use properties::PropertyError;
pub use value::{Declarations, StyleValue};
