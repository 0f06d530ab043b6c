pub mod mutator;
pub mod resolver;

pub use mutator::*;
pub use resolver::*;
