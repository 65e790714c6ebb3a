use include_dir::Dir;
use std::io;

use crate::LoadError;
use crate::Result;
use log::debug;

use super::VirtualFileSystem;

/// Serves files from a directory tree compiled into the binary.
pub struct Embedded {
    files: &'static Dir<'static>,
}

impl Embedded {
    #[must_use]
    pub fn new(files: &'static Dir<'static>) -> Self {
        Self { files }
    }
}

impl VirtualFileSystem for Embedded {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let Some(file) = self.files.get_file(path) else {
            debug!("{path} is not embedded");
            return Err(LoadError::io(path, io::ErrorKind::NotFound.into()));
        };
        Ok(file.contents().to_vec())
    }
}
