use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub trait FileMover {
    /// Moves `from` onto `to`, replacing whatever is at `to`.
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

pub trait FileDeleter {
    /// Removes `path`. A file that is already gone is not an error.
    fn delete_file(&mut self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileMover for LocalFs {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        debug!("rename: {} -> {}", from.display(), to.display());
        fs::rename(from, to)
    }
}

impl FileDeleter for LocalFs {
    fn delete_file(&mut self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                debug!("deleted: {}", path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("already gone: {}", path.display());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
