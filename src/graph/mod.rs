pub mod conversion;
pub mod definition;
pub mod index;

pub use conversion::*;
pub use definition::*;
