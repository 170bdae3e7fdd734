use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context as _};
use cfs_webclient::{CodeforcesUrlAnalyzer, ProblemKey, Url};
use lazy_regex::{regex_captures, regex_is_match};

pub fn replace_homedir_to_tilde(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Some(home_dir) = ::dirs::home_dir() else {
        return path
    };
    path.strip_prefix(home_dir)
        .map(|path| Path::new("~").join(path))
        .unwrap_or(path)
}

/// Accepts a problem URL, `<contest>/<problem>` or `<contest><problem>` (e.g. "1006A").
pub fn parse_problem_key(s: &str) -> anyhow::Result<ProblemKey> {
    if s.starts_with("https://") || s.starts_with("http://") {
        let url = Url::parse(s).with_context(|| format!("Failed to parse as URL '{}'", s))?;
        return CodeforcesUrlAnalyzer::extract_problem_key(&url)
            .with_context(|| format!("Not a Codeforces problem URL: {}", url));
    }
    if let Some((contest, problem)) = s.split_once('/') {
        let is_id = |id: &str| regex_is_match!(r"^[0-9A-Za-z_-]+$", id);
        ensure!(
            is_id(contest) && is_id(problem),
            "Contest and problem IDs may only contain ASCII letters, digits, '_' and '-': '{}'",
            s
        );
        return Ok(ProblemKey::new(contest, problem)?);
    }
    if let Some((_, contest, problem)) = regex_captures!(r"^([0-9]+)([A-Za-z][0-9A-Za-z]*)$", s) {
        return Ok(ProblemKey::new(contest, problem)?);
    }
    bail!(
        "Cannot recognize problem '{}'\n  Example: 1006A, 1006/A, https://codeforces.com/contest/1006/problem/A",
        s
    )
}
