use std::{
    fs::{self, OpenOptions, TryLockError},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// UTF-8 byte order mark, ignored when comparing against existing content.
const BOM: char = '\u{feff}';

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the exact content and was left untouched
    Unchanged,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Only write when the existing content differs (generated code)
    #[default]
    IfChanged,
    /// Always write, even if the content is identical
    Always,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (default: write only if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Set the overwrite policy
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Check whether the file on disk already holds exactly this content.
    ///
    /// A missing file or one that isn't valid UTF-8 is never current.
    pub fn is_current(&self) -> io::Result<bool> {
        match fs::read_to_string(&self.path) {
            Ok(existing) => {
                let existing = existing.strip_prefix(BOM).unwrap_or(&existing);
                Ok(existing == self.content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Write the file according to its overwrite policy.
    ///
    /// When the policy is [`Overwrite::IfChanged`] and the content is already
    /// current, the file is not opened for writing at all so its modification
    /// time is preserved.
    pub fn write(&self) -> io::Result<WriteResult> {
        if self.overwrite == Overwrite::IfChanged && self.is_current()? {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Write `content` while holding an exclusive lock on the file.
///
/// The parent directory must exist. The handle (and the lock with it) is
/// released when it goes out of scope, including on error.
fn write_file(path: &Path, content: &str) -> io::Result<()> {
    // Truncate only once the lock is held so a losing writer can't clobber
    // the file.
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    match file.try_lock() {
        Ok(()) => {}
        Err(TryLockError::WouldBlock) => {
            return Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "file is locked by another writer",
            ));
        }
        Err(TryLockError::Error(e)) => return Err(e),
    }

    file.set_len(0)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
