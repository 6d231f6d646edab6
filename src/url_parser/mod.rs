//! URL decomposition: base URL plus decoded, coerced query parameters.

pub mod batch;
pub mod decoder;
pub mod model;
pub mod parser;
pub mod url_processor;
pub mod url_reconstructor;

#[cfg(test)]
mod tests;

pub use batch::decompose_batch;
pub use model::{ParamMap, ParamValue, ParsedUrl};
pub use parser::decompose;
