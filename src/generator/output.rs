use crate::generator::GenerateError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// A file written under a temporary name and moved into place on commit.
///
/// Dropping it uncommitted removes the temporary file, so an aborted run
/// never leaves a half-written artifact at the final path.
pub struct PendingOutput {
    path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl PendingOutput {
    pub fn create(path: &Path) -> Result<(Self, File), GenerateError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| GenerateError::io("could not create", dir, e))?;
        }

        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));
        let file = File::create(&temp_path)
            .map_err(|e| GenerateError::io("could not create", &temp_path, e))?;

        let pending = Self {
            path: path.to_path_buf(),
            temp_path,
            committed: false,
        };
        Ok((pending, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the temporary file to its final path
    pub fn commit(mut self) -> Result<PathBuf, GenerateError> {
        fs::rename(&self.temp_path, &self.path)
            .map_err(|e| GenerateError::io("could not write", &self.path, e))?;
        self.committed = true;
        Ok(self.path.clone())
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}
