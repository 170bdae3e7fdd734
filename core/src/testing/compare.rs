use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CompareMode {
    /// Only the common prefix of both strings, trailing whitespace removed, has to agree.
    /// Trailing content of the longer string is ignored, so `"50\n"` matches `"5\n"`.
    #[default]
    Prefix,
    Exact,
}

impl CompareMode {
    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        use CompareMode::*;
        match self {
            Prefix => self::common_prefix_eq(actual.trim_end(), expected.trim_end()),
            Exact => actual == expected,
        }
    }
}

/// Compares both strings truncated to the character length of the shorter one.
///
/// ```
/// use cfs_core::testing::common_prefix_eq;
///
/// assert!(common_prefix_eq("5", "50"));
/// assert!(common_prefix_eq("", "10"));
/// assert!(!common_prefix_eq("50\n", "5\n"));
/// ```
pub fn common_prefix_eq(a: &str, b: &str) -> bool {
    a.chars().zip(b.chars()).all(|(x, y)| x == y)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExitPolicy {
    /// Judge a run exiting with non-zero status (or killed by a signal) as RE.
    pub fail_on_nonzero_exit: bool,
    /// Judge a run printing nothing on stdout as WA.
    pub fail_on_empty_stdout: bool,
}
