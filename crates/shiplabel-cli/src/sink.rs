//! Filesystem destination for downloaded label documents.

use std::fs;
use std::path::{Path, PathBuf};

use shiplabel_core::{LabelSink, SaveError};

/// Writes documents into a single output directory, creating it on demand.
#[derive(Debug, Clone)]
pub(crate) struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination path for a file name.
    pub(crate) fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl LabelSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), SaveError> {
        fs::create_dir_all(&self.root).map_err(|source| io_error(&self.root, source))?;
        let path = self.path_for(file_name);
        fs::write(&path, bytes).map_err(|source| io_error(&path, source))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "label document written");
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SaveError {
    SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}
