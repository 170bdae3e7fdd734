use std::{path::Path, time::Duration};

use cfs_webclient::{ProblemKey, SampleCase};

use super::{compare::*, error::*, result::*, runner::TestRunner};
use crate::storage::SampleStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    pub compare: CompareMode,
    pub exit_policy: ExitPolicy,
    pub time_limit: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Started(usize),
    Finished(&'a TestOutcome),
}

/// Runs a program against the samples cached for a problem.
#[derive(Debug, Clone)]
pub struct Verifier<'s> {
    store: &'s SampleStore,
    options: VerifyOptions,
}

impl<'s> Verifier<'s> {
    pub fn new(store: &'s SampleStore) -> Self {
        Self {
            store,
            options: VerifyOptions::default(),
        }
    }

    pub fn options(mut self, options: VerifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn get_options(&self) -> &VerifyOptions {
        &self.options
    }

    /// Runner for `program` honoring the configured time limit.
    pub fn runner_for(&self, program: impl AsRef<Path>) -> TestRunner {
        TestRunner::new(program.as_ref()).time_limit(self.options.time_limit)
    }

    /// Loads the samples of `key` in index order.
    /// An index lacking its input or its output is an error.
    pub fn prepare(&self, key: &ProblemKey) -> Result<Vec<(usize, SampleCase)>> {
        let set = self.store.load(key)?;
        Ok(set.into_samples()?)
    }

    pub fn judge(&self, output: &ProcessOutput, expected: &str) -> JudgeCode {
        let policy = &self.options.exit_policy;
        if policy.fail_on_nonzero_exit && output.status != Some(0) {
            return JudgeCode::RE;
        }
        if policy.fail_on_empty_stdout && output.stdout.is_empty() {
            return JudgeCode::WA;
        }
        if self.options.compare.matches(&output.stdout, expected) {
            JudgeCode::AC
        } else {
            JudgeCode::WA
        }
    }

    /// Runs one sample. The configured time limit, when set, takes precedence
    /// over the runner's own limit.
    pub async fn run_case(
        &self,
        runner: &TestRunner,
        index: usize,
        sample: &SampleCase,
    ) -> Result<TestOutcome> {
        let time_limit = self.options.time_limit.or(runner.get_time_limit());
        let RunOutcome {
            output,
            execution_time,
        } = runner.run_within(sample.input.as_bytes(), time_limit).await?;

        let judge = match &output {
            None => JudgeCode::TLE,
            Some(output) => self.judge(output, &sample.output),
        };
        log::debug!("Sample {}: {} [{}ms]", index, judge, execution_time.as_millis());

        Ok(TestOutcome {
            index,
            judge,
            execution_time,
            output,
            expected: sample.output.to_owned(),
        })
    }

    /// Every sample is run sequentially, one process at a time.
    /// `on_progress` is told when each sample starts and finishes.
    pub async fn verify_samples<F>(
        &self,
        samples: &[(usize, SampleCase)],
        runner: &TestRunner,
        mut on_progress: F,
    ) -> Result<Verdict>
    where
        F: FnMut(Progress<'_>),
    {
        let mut outcomes = Vec::with_capacity(samples.len());
        for (index, sample) in samples {
            on_progress(Progress::Started(*index));
            let res = self.run_case(runner, *index, sample).await?;
            on_progress(Progress::Finished(&res));
            outcomes.push(res);
        }
        Ok(Verdict { outcomes })
    }

    pub async fn verify_with_runner(&self, key: &ProblemKey, runner: &TestRunner) -> Result<Verdict> {
        let samples = self.prepare(key)?;
        self.verify_samples(&samples, runner, |_| ()).await
    }

    pub async fn verify(&self, key: &ProblemKey, program: impl AsRef<Path>) -> Result<Verdict> {
        let runner = self.runner_for(program);
        self.verify_with_runner(key, &runner).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::{self, SampleFileKind};

    struct Fixture {
        _tmp: tempfile::TempDir,
        store: SampleStore,
        key: ProblemKey,
    }

    fn fixture(samples: &[(&str, &str)]) -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let store = SampleStore::new(tmp.path().join(".cf-samples"));
        let key = ProblemKey::new("1", "A").unwrap();
        let samples: Vec<_> = samples
            .iter()
            .map(|&(i, o)| SampleCase::new(i, o))
            .collect();
        store.store(&key, &samples).unwrap();
        Fixture {
            _tmp: tmp,
            store,
            key,
        }
    }

    fn sh(script: &str) -> TestRunner {
        TestRunner::new("/bin/sh").args(["-c", script])
    }

    fn judges(v: &Verdict) -> Vec<JudgeCode> {
        v.outcomes.iter().map(|x| x.judge).collect()
    }

    #[tokio::test]
    async fn verify_passes_on_matching_output() {
        let f = fixture(&[("2\n1 1\n", "2\n")]);
        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &sh("head -n 1"))
            .await
            .unwrap();
        assert!(v.passed());
        assert_eq!(judges(&v), vec![JudgeCode::AC]);
        assert_eq!(v.outcomes[0].output.as_ref().unwrap().stdout, "2\n");
    }

    #[tokio::test]
    async fn verify_prefix_mode_accepts_longer_output() {
        let f = fixture(&[("1\n", "5\n")]);
        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &sh("echo 50"))
            .await
            .unwrap();
        assert!(v.passed());
    }

    #[tokio::test]
    async fn verify_exact_mode_rejects_longer_output() {
        let f = fixture(&[("1\n", "5\n")]);
        let opts = VerifyOptions {
            compare: CompareMode::Exact,
            ..Default::default()
        };
        let v = Verifier::new(&f.store)
            .options(opts)
            .verify_with_runner(&f.key, &sh("echo 50"))
            .await
            .unwrap();
        assert!(!v.passed());
        assert_eq!(judges(&v), vec![JudgeCode::WA]);
    }

    #[tokio::test]
    async fn verify_is_and_over_all_samples() {
        let f = fixture(&[("1\n", "1\n"), ("2\n", "3\n"), ("3\n", "3\n")]);
        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &sh("cat"))
            .await
            .unwrap();
        assert!(!v.passed());
        assert_eq!(v.num_passed(), 2);
        assert_eq!(judges(&v), vec![JudgeCode::AC, JudgeCode::WA, JudgeCode::AC]);
        assert_eq!(
            v.outcomes.iter().map(|x| x.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[tokio::test]
    async fn verify_scores_nonzero_exit_on_stdout_by_default() {
        let f = fixture(&[("1\n", "1\n")]);
        let runner = sh("cat; exit 3");

        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &runner)
            .await
            .unwrap();
        assert!(v.passed());

        let opts = VerifyOptions {
            exit_policy: ExitPolicy {
                fail_on_nonzero_exit: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let v = Verifier::new(&f.store)
            .options(opts)
            .verify_with_runner(&f.key, &runner)
            .await
            .unwrap();
        assert_eq!(judges(&v), vec![JudgeCode::RE]);
    }

    #[tokio::test]
    async fn verify_empty_stdout_policy() {
        let f = fixture(&[("1\n", "10\n")]);
        let runner = sh("true");

        // weak match: an empty answer agrees with any expected output
        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &runner)
            .await
            .unwrap();
        assert!(v.passed());

        let opts = VerifyOptions {
            exit_policy: ExitPolicy {
                fail_on_empty_stdout: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let v = Verifier::new(&f.store)
            .options(opts)
            .verify_with_runner(&f.key, &runner)
            .await
            .unwrap();
        assert_eq!(judges(&v), vec![JudgeCode::WA]);
    }

    #[tokio::test]
    async fn verify_judges_tle() {
        let f = fixture(&[("1\n", "1\n")]);
        let opts = VerifyOptions {
            time_limit: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let v = Verifier::new(&f.store)
            .options(opts)
            .verify_with_runner(&f.key, &sh("exec sleep 5"))
            .await
            .unwrap();
        assert_eq!(judges(&v), vec![JudgeCode::TLE]);
        assert_eq!(v.outcomes[0].output, None);
    }

    #[tokio::test]
    async fn verify_runner_limit_applies_without_configured_limit() {
        let f = fixture(&[("1\n", "1\n")]);
        let runner = sh("exec sleep 5").time_limit(Some(Duration::from_millis(200)));
        let v = Verifier::new(&f.store)
            .verify_with_runner(&f.key, &runner)
            .await
            .unwrap();
        assert_eq!(judges(&v), vec![JudgeCode::TLE]);
    }

    #[tokio::test]
    async fn verify_samples_reports_progress_in_order() {
        let f = fixture(&[("1\n", "1\n"), ("2\n", "3\n")]);
        let verifier = Verifier::new(&f.store);
        let samples = verifier.prepare(&f.key).unwrap();

        let mut events = Vec::new();
        let v = verifier
            .verify_samples(&samples, &sh("cat"), |p| match p {
                Progress::Started(i) => events.push(format!("start {}", i)),
                Progress::Finished(res) => events.push(format!("{} {}", res.judge, res.index)),
            })
            .await
            .unwrap();
        assert_eq!(events, vec!["start 0", "AC 0", "start 1", "WA 1"]);
        assert_eq!(v.num_passed(), 1);
    }

    #[tokio::test]
    async fn verify_fails_on_incomplete_sample_before_running() {
        let f = fixture(&[("1\n", "1\n")]);
        let dir = f.store.problem_dir(&f.key);
        fsutil::write(dir.join("1.in"), "2\n").unwrap();

        // a missing program would fail with Error::Spawn if anything were run
        let err = Verifier::new(&f.store)
            .verify(&f.key, "/nonexistent/cfs-solution")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Store(storage::Error::IncompleteSample {
                index: 1,
                missing: SampleFileKind::Output,
            })
        ));
    }

    #[tokio::test]
    async fn verify_fails_on_unknown_problem() {
        let f = fixture(&[]);
        let other = ProblemKey::new("2", "B").unwrap();
        let err = Verifier::new(&f.store)
            .verify(&other, "/bin/cat")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Store(storage::Error::NoSuchProblemDir { .. })
        ));
    }

    #[tokio::test]
    async fn verify_fails_on_missing_program() {
        let f = fixture(&[("1\n", "1\n")]);
        let err = Verifier::new(&f.store)
            .verify(&f.key, "/nonexistent/cfs-solution")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
