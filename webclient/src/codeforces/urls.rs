use ::lazy_regex::{lazy_regex, Lazy, Regex};

use crate::{error::*, model::*, util};

static RE_CONTEST_PROBLEM_URL_PATH: Lazy<Regex> =
    lazy_regex!(r"^/contest/([0-9A-Za-z_-]+)/problem/([0-9A-Za-z_-]+)/?$");
static RE_PROBLEMSET_PROBLEM_URL_PATH: Lazy<Regex> =
    lazy_regex!(r"^/problemset/problem/([0-9A-Za-z_-]+)/([0-9A-Za-z_-]+)/?$");

pub const DOMAIN: &str = "codeforces.com";

pub struct CodeforcesUrlAnalyzer;

impl CodeforcesUrlAnalyzer {
    pub fn is_codeforces(url: &Url) -> bool {
        url.scheme() == "https"
            && matches!(url.domain(), Some(d) if d == DOMAIN || d.ends_with(".codeforces.com"))
    }

    pub fn is_problem_url(url: &Url) -> bool {
        Self::is_codeforces(url) && Self::captures_key(url.path()).is_some()
    }

    /// Returns `None` unless `url` points to a Codeforces problem page.
    pub fn extract_problem_key(url: &Url) -> Option<ProblemKey> {
        if !Self::is_codeforces(url) {
            return None;
        }
        let (contest, problem) = Self::captures_key(url.path())?;
        ProblemKey::new(contest, problem).ok()
    }

    fn captures_key(path: &str) -> Option<(String, String)> {
        RE_CONTEST_PROBLEM_URL_PATH
            .captures(path)
            .or_else(|| RE_PROBLEMSET_PROBLEM_URL_PATH.captures(path))
            .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
    }

    /// Canonical problem page URL for `key` on `host`.
    ///
    /// ```
    /// use cfs_webclient::{CodeforcesUrlAnalyzer, ProblemKey};
    ///
    /// let key = ProblemKey::new("1006", "A").unwrap();
    /// let url = CodeforcesUrlAnalyzer::problem_url("codeforces.com", &key).unwrap();
    /// assert_eq!(url.as_str(), "https://codeforces.com/contest/1006/problem/A");
    /// ```
    pub fn problem_url(host: &str, key: &ProblemKey) -> Result<Url> {
        util::parse_url(format!(
            "https://{}/contest/{}/problem/{}",
            host,
            key.contest(),
            key.problem()
        ))
    }
}
