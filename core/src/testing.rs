pub mod compare;
pub mod error;
pub mod result;
pub mod runner;
pub mod verifier;

pub use compare::*;
pub use error::*;
pub use result::*;
pub use runner::*;
pub use verifier::*;
