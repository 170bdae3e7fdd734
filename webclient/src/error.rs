use reqwest::StatusCode;
use scraper::Selector;

use crate::model::problem_key;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to parse as URL '{url}'")]
    InvalidSyntaxUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Unexpected response code '{got}' (expected '{expected}') while requesting to {requested_url}")]
    UnexpectedResponseCode {
        got: StatusCode,
        expected: StatusCode,
        requested_url: String,
    },

    #[error("No such html element (selector: {0:?})")]
    NoSuchElementMatchesToSelector(Selector),

    #[error("Number of sample inputs ({inputs}) differs from number of sample outputs ({outputs})")]
    SampleCountMismatch { inputs: usize, outputs: usize },

    #[error(transparent)]
    ProblemKey(#[from] problem_key::Error),

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
}
