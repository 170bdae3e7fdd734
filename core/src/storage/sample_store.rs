use std::{
    collections::BTreeMap,
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use cfs_webclient::{ProblemKey, SampleCase};

use super::error::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFileKind {
    Input,
    Output,
}

impl SampleFileKind {
    pub const ALL: [Self; 2] = [Self::Input, Self::Output];

    pub const fn extension(&self) -> &'static str {
        use SampleFileKind::*;
        match self {
            Input => "in",
            Output => "out",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }
}

impl fmt::Display for SampleFileKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Contents found on disk for one sample index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSample {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Samples of one problem keyed by index, as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSampleSet(BTreeMap<usize, StoredSample>);

impl Deref for StoredSampleSet {
    type Target = BTreeMap<usize, StoredSample>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StoredSampleSet {
    /// Pairs every index with its sample, failing on the first index
    /// that lacks either its input or its output.
    pub fn into_samples(self) -> Result<Vec<(usize, SampleCase)>> {
        self.0
            .into_iter()
            .map(|(index, s)| match (s.input, s.output) {
                (Some(input), Some(output)) => Ok((index, SampleCase { input, output })),
                (None, _) => Err(Error::IncompleteSample {
                    index,
                    missing: SampleFileKind::Input,
                }),
                (_, None) => Err(Error::IncompleteSample {
                    index,
                    missing: SampleFileKind::Output,
                }),
            })
            .collect()
    }
}

/// Sample cache laid out as `<root>/<contest>/<problem>/<index>.{in,out}`.
///
/// Writers to the same key are not synchronized.
#[derive(Debug, Clone)]
pub struct SampleStore {
    root: PathBuf,
}

impl SampleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn problem_dir(&self, key: &ProblemKey) -> PathBuf {
        self.root.join(key.relative_dir())
    }

    pub fn exists(&self, key: &ProblemKey) -> bool {
        self.problem_dir(key).is_dir()
    }

    /// ```
    /// use cfs_core::storage::{SampleFileKind, SampleStore};
    ///
    /// assert_eq!(SampleStore::sample_filename(0, SampleFileKind::Input), "0.in");
    /// assert_eq!(SampleStore::sample_filename(12, SampleFileKind::Output), "12.out");
    /// ```
    pub fn sample_filename(index: usize, kind: SampleFileKind) -> String {
        format!("{}.{}", index, kind.extension())
    }

    /// Inverse of [`SampleStore::sample_filename`].
    /// Leading zeros are rejected so that every index has exactly one filename.
    pub fn parse_sample_filename(filename: &str) -> Option<(usize, SampleFileKind)> {
        let (stem, ext) = filename.rsplit_once('.')?;
        let kind = SampleFileKind::from_extension(ext)?;
        if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if stem.len() > 1 && stem.starts_with('0') {
            return None;
        }
        let index = stem.parse().ok()?;
        Some((index, kind))
    }

    /// Writes every sample as `<index>.in` / `<index>.out`, overwriting existing files,
    /// then removes sample files of indices beyond the new set.
    /// Returns the problem directory.
    #[must_use]
    pub fn store<'a>(
        &self,
        key: &ProblemKey,
        samples: impl IntoIterator<Item = &'a SampleCase>,
    ) -> Result<PathBuf> {
        let dir = self.problem_dir(key);
        fsutil::mkdir_all(&dir)?;

        let mut count = 0;
        for (index, sample) in samples.into_iter().enumerate() {
            let infile = dir.join(Self::sample_filename(index, SampleFileKind::Input));
            let outfile = dir.join(Self::sample_filename(index, SampleFileKind::Output));
            fsutil::write(infile, &sample.input)?;
            fsutil::write(outfile, &sample.output)?;
            count = index + 1;
        }

        for path in fsutil::list_files(&dir)? {
            let parsed = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Self::parse_sample_filename);
            if matches!(parsed, Some((index, _)) if index >= count) {
                log::debug!("Remove stale sample file {:?}", path);
                fsutil::remove_file(&path)?;
            }
        }
        Ok(dir)
    }

    #[must_use]
    pub fn load(&self, key: &ProblemKey) -> Result<StoredSampleSet> {
        let dir = self.problem_dir(key);
        if !dir.is_dir() {
            return Err(Error::NoSuchProblemDir {
                key: key.to_owned(),
                dir,
            });
        }

        let mut set = BTreeMap::<usize, StoredSample>::new();
        for path in fsutil::list_files(&dir)? {
            let parsed = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Self::parse_sample_filename);
            let Some((index, kind)) = parsed else {
                log::debug!("Ignore non-sample file {:?}", path);
                continue
            };
            let contents = fsutil::read_to_string(&path)?;
            let entry = set.entry(index).or_default();
            match kind {
                SampleFileKind::Input => entry.input = Some(contents),
                SampleFileKind::Output => entry.output = Some(contents),
            }
        }
        Ok(StoredSampleSet(set))
    }
}
