pub mod client;
pub mod extract;
pub mod urls;

pub use client::*;
pub use extract::*;
pub use urls::*;
