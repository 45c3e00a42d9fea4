//! File-save collaborator that writes exports into a directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use bizfind_core::{ExportError, FileSink};

/// Writes each document to `<dir>/<file_name>`, replacing any previous file.
///
/// Contents go to a temporary sibling first and are renamed into place, so a
/// failed write never leaves a truncated `results.csv` behind.
pub(crate) struct DirectorySink {
    dir: PathBuf,
    last_written: Option<PathBuf>,
}

impl DirectorySink {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_written: None,
        }
    }

    pub(crate) fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }

    fn write_atomically(&self, file_name: &str, contents: &[u8]) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);
        let staging = self.dir.join(format!(".{file_name}.partial"));

        let written = fs::File::create(&staging).and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&staging, &target)) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        Ok(target)
    }
}

impl FileSink for DirectorySink {
    fn save(
        &mut self,
        file_name: &str,
        mime_type: &str,
        contents: &[u8],
    ) -> Result<(), ExportError> {
        let path = self
            .write_atomically(file_name, contents)
            .map_err(|source| ExportError::Delivery {
                file_name: file_name.to_owned(),
                source,
            })?;
        tracing::debug!(path = %path.display(), mime_type, bytes = contents.len(), "export written");
        self.last_written = Some(path);
        Ok(())
    }
}
