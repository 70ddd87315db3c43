//! Temporary art directories populated with placeholder image files.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Temporary art directory removed when dropped.
pub struct ArtDirectory {
    dir: TempDir,
}

impl ArtDirectory {
    /// Creates an empty art directory.
    pub fn empty() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Creates an art directory containing one placeholder file per name.
    ///
    /// File contents are not valid images; use `write_file` for real image bytes.
    ///
    /// # Arguments
    /// - `names` - Filenames to create inside the directory
    pub fn with_files(names: &[&str]) -> Result<Self, TestError> {
        let art = Self::empty()?;
        for name in names {
            art.write_file(name, name.as_bytes())?;
        }
        Ok(art)
    }

    /// Writes a file into the directory, replacing any existing file of that name.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Full path of the written file
    pub fn write_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf, TestError> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a directory inside this one that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing")
    }
}
