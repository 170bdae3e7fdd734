pub mod problem_key;
pub mod sample;

pub use problem_key::ProblemKey;
pub use sample::SampleCase;

pub use reqwest::Url;
