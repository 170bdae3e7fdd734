pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}

use std::path::PathBuf;
use std::time::Duration;

use cfs_webclient::{CodeforcesClient, ProblemKey, SampleCase};
use colored::Colorize as _;
use error::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::storage::SampleStore;
use crate::style;
use crate::testing::{JudgeCode, Progress, TestRunner, Verdict, Verifier};

/// Returns (saved_problem_dir, samples)
pub async fn fetch_and_save_samples(
    cli: &CodeforcesClient,
    key: &ProblemKey,
    store: &SampleStore,
) -> Result<(PathBuf, Vec<SampleCase>)> {
    let samples = cli
        .fetch_samples(key)
        .await
        .with_context(|| format!("Failed to fetch samples of problem {}", key))?;

    let dir = store
        .store(key, &samples)
        .context("Failed to save samples")?;

    log::info!("Saved {} samples in {:?}", samples.len(), dir);
    Ok((dir, samples))
}

/// Fetches the samples of `key` unless they are already cached.
pub async fn ensure_samples_saved(
    cli: &CodeforcesClient,
    key: &ProblemKey,
    store: &SampleStore,
) -> Result<PathBuf> {
    if store.exists(key) {
        return Ok(store.problem_dir(key));
    }
    self::fetch_and_save_samples(cli, key, store)
        .await
        .map(|(dir, _samples)| dir)
}

pub async fn do_verify(
    verifier: &Verifier<'_>,
    key: &ProblemKey,
    runner: &TestRunner,
) -> Result<Verdict> {
    let samples = verifier
        .prepare(key)
        .with_context(|| format!("Failed to load samples of problem {}", key))?;
    ensure!(!samples.is_empty(), "No samples are saved for problem {}", key);

    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .context("Invalid progress bar template")?;

    log::info!("Running: {}", runner.command_line());

    let mut bar: Option<ProgressBar> = None;
    let res = verifier
        .verify_samples(&samples, runner, |progress| match progress {
            Progress::Started(index) => {
                let b = ProgressBar::new_spinner()
                    .with_style(spinner_style.clone())
                    .with_message(format!("{} ...", style::sample_name(index)));
                b.enable_steady_tick(Duration::from_millis(50));
                bar = Some(b);
            }
            Progress::Finished(res) => {
                if let Some(b) = bar.take() {
                    b.finish_with_message(style::outcome_line(res).cyan().to_string());
                }
            }
        })
        .await;

    let verdict = match res {
        Ok(verdict) => verdict,
        Err(e) => {
            if let Some(b) = bar.take() {
                b.abandon();
            }
            return Err(e).context("Failed to run the solution");
        }
    };
    println!();

    verdict
        .outcomes
        .iter()
        .filter(|x| x.judge != JudgeCode::AC)
        .for_each(style::print_outcome_detail);

    style::print_verdict_summary(&verdict);
    Ok(verdict)
}
