use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Contest ID must not be empty")]
    EmptyContest,

    #[error("Problem ID must not be empty")]
    EmptyProblem,
}

/// Identifies one problem, and with it one namespace of the sample cache.
/// (e.g.) contest "1006", problem "A"
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
pub struct ProblemKey {
    contest: String,
    problem: String,
}

impl ProblemKey {
    pub fn new(contest: impl Into<String>, problem: impl Into<String>) -> Result<Self> {
        let (contest, problem) = (contest.into(), problem.into());
        if contest.is_empty() {
            return Err(Error::EmptyContest);
        }
        if problem.is_empty() {
            return Err(Error::EmptyProblem);
        }
        Ok(Self { contest, problem })
    }

    pub fn contest(&self) -> &str {
        &self.contest
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Relative directory of this key inside a sample cache root.
    ///
    /// ```
    /// use cfs_webclient::ProblemKey;
    /// use std::path::Path;
    ///
    /// let key = ProblemKey::new("1006", "A").unwrap();
    /// assert_eq!(key.relative_dir(), Path::new("1006/A"));
    /// ```
    pub fn relative_dir(&self) -> PathBuf {
        [self.contest.as_str(), self.problem.as_str()].iter().collect()
    }
}

impl std::fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.contest, self.problem)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn problem_key_rejects_empty_ids() {
        assert_eq!(ProblemKey::new("", "A"), Err(Error::EmptyContest));
        assert_eq!(ProblemKey::new("1006", ""), Err(Error::EmptyProblem));
    }

    #[test]
    fn problem_key_display() {
        let key = ProblemKey::new("1006", "A").unwrap();
        assert_eq!(key.to_string(), "1006A");
        assert_eq!(key.contest(), "1006");
        assert_eq!(key.problem(), "A");
    }
}
