// exported modules
pub mod error;
pub mod fetch;
pub mod model;

// client impls
pub mod codeforces;

// re-exports
pub use codeforces::{CodeforcesClient, CodeforcesUrlAnalyzer};
pub use error::*;
pub use fetch::{HttpFetcher, PageFetcher};
pub use model::*;

// internal modules
mod util;
