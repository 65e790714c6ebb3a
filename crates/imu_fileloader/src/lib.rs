#![warn(clippy::pedantic)]

use log::{debug, trace};
use std::{fmt, io, path::PathBuf};

use vfs::{filesystem::FileSystem, VirtualFileSystem};

pub mod vfs;
pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Binds a filename and reads the named file on demand.
///
/// Construction never touches the backing store, so a loader for a file that
/// does not exist yet is perfectly valid until [`FileLoader::read`] is called.
#[derive(Debug, Clone)]
pub struct FileLoader<FS = FileSystem> {
    filename: String,
    fs: FS,
}

impl FileLoader {
    #[must_use]
    pub fn new(filename: String) -> Self {
        Self::with_file_system(filename, FileSystem)
    }
}

impl<FS> FileLoader<FS>
where
    FS: VirtualFileSystem,
{
    #[must_use]
    pub fn with_file_system(filename: String, fs: FS) -> Self {
        Self { filename, fs }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn into_filename(self) -> String {
        self.filename
    }

    /// Reads the whole file and returns its raw contents
    ///
    /// # Errors
    ///
    /// This function will return an error if the file is missing, unreadable,
    /// a directory, or if the read itself fails.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        trace!("Reading {}", self.filename);
        let bytes = self.fs.read_bytes(&self.filename)?;
        debug!("Read {} bytes from {}", bytes.len(), self.filename);
        Ok(bytes)
    }

    /// Reads the whole file and returns its contents as a string
    ///
    /// # Errors
    ///
    /// Same as [`FileLoader::read_bytes`], and additionally fails with
    /// [`io::ErrorKind::InvalidData`] when the contents are not valid UTF-8.
    pub fn read(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes).map_err(|e| {
            LoadError::io(&self.filename, io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }
}
