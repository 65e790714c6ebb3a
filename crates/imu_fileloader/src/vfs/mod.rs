use crate::Result;

pub mod embedded;
pub mod filesystem;

pub trait VirtualFileSystem {
    /// Reads the content of the file at the given path
    ///
    /// # Errors
    /// An error will be returned if the file cannot be read
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>>;
}

impl<T: VirtualFileSystem + ?Sized> VirtualFileSystem for &T {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(path)
    }
}

impl<T: VirtualFileSystem + ?Sized> VirtualFileSystem for Box<T> {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(path)
    }
}
