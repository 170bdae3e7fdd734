use std::path::PathBuf;

use cfs_webclient::ProblemKey;

use super::SampleFileKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No samples saved for problem {key} (no such dir {dir:?})")]
    NoSuchProblemDir { key: ProblemKey, dir: PathBuf },

    #[error("Sample {index} is incomplete: missing '{index}.{missing}'")]
    IncompleteSample {
        index: usize,
        missing: SampleFileKind,
    },

    #[error(transparent)]
    Fs(#[from] fsutil::Error),
}
