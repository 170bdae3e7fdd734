use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// `None` when the time limit expired and the process was killed.
    pub output: Option<ProcessOutput>,
    pub execution_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum JudgeCode {
    AC,
    WA,
    RE,
    TLE,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub index: usize,
    pub judge: JudgeCode,
    pub execution_time: Duration,
    pub output: Option<ProcessOutput>,
    pub expected: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub outcomes: Vec<TestOutcome>,
}

impl Verdict {
    /// AND over every sample; vacuously true when there is no sample.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|x| x.judge == JudgeCode::AC)
    }

    pub fn num_passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|x| x.judge == JudgeCode::AC)
            .count()
    }
}
