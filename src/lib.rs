#[macro_use]
extern crate lazy_static;

extern crate regex;

mod core;

pub use core::compile;
pub use core::sem::fsm::SemanticError;
pub use core::Compilation;
pub use core::CompileError;
