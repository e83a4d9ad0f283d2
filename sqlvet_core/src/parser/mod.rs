pub mod ast;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod visit;
