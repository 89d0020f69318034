//! Propositional logic: sentences, model checking and a text syntax.

pub mod model_check;
pub mod parser;
pub mod sentence;

pub use model_check::{model_check, MAX_MODEL_SYMBOLS};
pub use parser::{parse, MAX_DEPTH};
pub use sentence::{Model, Sentence};
