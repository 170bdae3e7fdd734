use serde::{Deserialize, Serialize};

/// One sample testcase shown on a problem page.
/// Its identity is its position in the sequence the extractor returned.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SampleCase {
    pub input: String,
    pub output: String,
}

impl SampleCase {
    pub fn new<S1, S2>(input: S1, output: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
