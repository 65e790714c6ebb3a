use log::debug;

use super::VirtualFileSystem;
use crate::{LoadError, Result};

/// Host filesystem backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;
impl VirtualFileSystem for FileSystem {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| {
            debug!("Couldn't read {path}: {e}");
            LoadError::io(path, e)
        })
    }
}
