pub mod error;
pub mod sample_store;

pub use error::*;
pub use sample_store::*;
