use std::collections::HashMap;
use std::fmt;
use std::io;

/// Largest embeddable file size, and the largest offset a handle accepts.
pub const MAX_SIZE: i64 = i32::MAX as i64; // ~1.99 GiB

/// Immutable contents and version of one embedded file.
#[derive(Debug)]
pub struct Entry {
    contents: &'static [u8],
    version: &'static str,
}

impl Entry {
    pub const fn new(contents: &'static [u8], version: &'static str) -> Self {
        Self { contents, version }
    }

    pub fn contents(&self) -> &'static [u8] {
        self.contents
    }

    pub fn version(&self) -> &'static str {
        self.version
    }
}

/// Errors returned by the virtual file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No file is embedded at the requested path.
    NotFound(String),
    /// The file exists but its version differs from the requested one.
    VersionMismatch {
        path: String,
        requested: String,
        actual: String,
    },
    /// A raw seek origin other than start (0), current (1) or end (2).
    InvalidWhence(i32),
    /// A seek would move the cursor outside the file.
    InvalidOffset(i64),
    /// The cursor is at the end of the file.
    EndOfStream,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "file not found: {}", path),
            Error::VersionMismatch {
                path,
                requested,
                actual,
            } => write!(
                f,
                "version mismatch (requested: {}, actual: {}): {}",
                requested, actual, path
            ),
            Error::InvalidWhence(whence) => write!(f, "invalid seek whence: {}", whence),
            Error::InvalidOffset(offset) => write!(f, "invalid target offset: {}", offset),
            Error::EndOfStream => write!(f, "end of stream"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::NotFound(_) => io::ErrorKind::NotFound,
            Error::EndOfStream => io::ErrorKind::UnexpectedEof,
            Error::VersionMismatch { .. } | Error::InvalidWhence(_) | Error::InvalidOffset(_) => {
                io::ErrorKind::InvalidInput
            }
        };
        io::Error::new(kind, err)
    }
}

/// Origin of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    FromStart,
    FromCurrent,
    FromEnd,
}

impl TryFrom<i32> for Whence {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Whence::FromStart),
            1 => Ok(Whence::FromCurrent),
            2 => Ok(Whence::FromEnd),
            other => Err(Error::InvalidWhence(other)),
        }
    }
}

/// Read-only lookup table from virtual path to entry.
///
/// Built once from a static entry list and never mutated afterwards, so it
/// can be shared by any number of readers.
#[derive(Debug)]
pub struct Store {
    index: HashMap<&'static str, &'static Entry>,
}

impl Store {
    pub fn new(entries: &'static [(&'static str, Entry)]) -> Self {
        let index = entries
            .iter()
            .map(|(path, entry)| (*path, entry))
            .collect();
        Self { index }
    }

    /// Open the file at `path`.
    ///
    /// A non-empty `version` must equal the stored version; an empty one
    /// skips the check.
    pub fn open(&self, path: &str, version: &str) -> Result<File, Error> {
        let (&key, &entry) = self
            .index
            .get_key_value(path)
            .ok_or_else(|| Error::NotFound(path.to_string()))?;

        if !version.is_empty() && entry.version != version {
            return Err(Error::VersionMismatch {
                path: path.to_string(),
                requested: version.to_string(),
                actual: entry.version.to_string(),
            });
        }

        Ok(File {
            entry,
            path: key,
            offset: 0,
        })
    }

    /// Get an entry without opening a handle
    pub fn get(&self, path: &str) -> Option<&'static Entry> {
        self.index.get(path).copied()
    }

    /// All embedded paths, sorted
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.index.keys().copied().collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// An open virtual file: a private cursor over shared, immutable contents.
#[derive(Debug)]
pub struct File {
    entry: &'static Entry,
    path: &'static str,
    offset: i64,
}

impl File {
    /// Path the file was opened with.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Version of the contents: the Adler-32 checksum in hex.
    pub fn version(&self) -> &str {
        self.entry.version
    }

    /// Number of bytes in the file.
    pub fn size(&self) -> i64 {
        self.entry.contents.len() as i64
    }

    /// Read up to `buf.len()` bytes from the cursor.
    ///
    /// Returns `Err(Error::EndOfStream)` once the cursor sits at the end,
    /// even when `buf` is empty. An empty `buf` before the end yields
    /// `Ok(0)`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let available = self.size() - self.offset;
        if available == 0 {
            return Err(Error::EndOfStream);
        }

        let count = buf.len().min(available as usize);
        let start = self.offset as usize;
        buf[..count].copy_from_slice(&self.entry.contents[start..start + count]);
        self.offset += count as i64;
        Ok(count)
    }

    /// Move the cursor and return its new position.
    ///
    /// `Whence::FromEnd` positions at `size - offset`. A target outside
    /// `0..=size` fails with `Error::InvalidOffset` and leaves the cursor
    /// where it was.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<i64, Error> {
        if offset > MAX_SIZE {
            return Err(Error::InvalidOffset(offset));
        }

        let size = self.size();
        let target = match whence {
            Whence::FromStart => Some(offset),
            Whence::FromCurrent => self.offset.checked_add(offset),
            Whence::FromEnd => size.checked_sub(offset),
        }
        .ok_or(Error::InvalidOffset(offset))?;

        if !(0..=size.min(MAX_SIZE)).contains(&target) {
            return Err(Error::InvalidOffset(target));
        }

        self.offset = target;
        Ok(target)
    }
}

impl io::Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match File::read(self, buf) {
            Ok(count) => Ok(count),
            Err(Error::EndOfStream) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }
}

/// `SeekFrom::End(n)` positions at `size - n`, like [`File::seek`].
impl io::Seek for File {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            io::SeekFrom::Start(n) => (i64::try_from(n).unwrap_or(i64::MAX), Whence::FromStart),
            io::SeekFrom::Current(n) => (n, Whence::FromCurrent),
            io::SeekFrom::End(n) => (n, Whence::FromEnd),
        };
        let target = File::seek(self, offset, whence)?;
        Ok(target as u64)
    }
}
