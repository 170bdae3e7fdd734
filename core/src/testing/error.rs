use std::{io, path::PathBuf};

use crate::storage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to spawn {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open {0} of subprocess")]
    PipeUnavailable(&'static str),

    #[error("Failed to communicate with subprocess: {0}")]
    Communicate(#[source] io::Error),

    #[error(transparent)]
    Store(#[from] storage::Error),
}
