
use crate::generator::GenerateError;
use crate::runtime::MAX_SIZE;
use adler2::Adler32;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Bytes read from a source file per step.
pub const CHUNK_SIZE: usize = 4096;

/// Receives one entry of the byte table at a time.
pub trait EntrySink {
    fn begin_entry(&mut self, virtual_path: &str) -> io::Result<()>;
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;
    fn end_entry(&mut self, version: &str) -> io::Result<()>;
}

/// Streams source files into an [`EntrySink`] while computing their
/// version.
pub struct ContentEncoder {
    buf: Vec<u8>,
}

impl ContentEncoder {
    pub fn new() -> Self {
        Self {
            buf: vec![0; CHUNK_SIZE],
        }
    }

    /// Encode `source` under `virtual_path` and return its version.
    ///
    /// `declared_size` is checked against [`MAX_SIZE`] before the file is
    /// opened, so an oversized file leaves no trace in the sink.
    pub fn encode(
        &mut self,
        sink: &mut dyn EntrySink,
        virtual_path: &str,
        source: &Path,
        declared_size: u64,
    ) -> Result<String, GenerateError> {
        check_size(source, declared_size)?;

        let mut file =
            File::open(source).map_err(|e| GenerateError::io("could not open", source, e))?;
        let write_err = |e| GenerateError::io("could not write", virtual_path, e);

        sink.begin_entry(virtual_path).map_err(write_err)?;

        let mut hash = Adler32::new();
        loop {
            let n = match file.read(&mut self.buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(GenerateError::io("could not read", source, e)),
            };
            hash.write_slice(&self.buf[..n]);
            sink.write_bytes(&self.buf[..n]).map_err(write_err)?;
        }

        let version = format_version(hash.checksum());
        sink.end_entry(&version).map_err(write_err)?;

        Ok(version)
    }
}

impl Default for ContentEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject files the runtime could not address.
pub fn check_size(source: &Path, declared_size: u64) -> Result<(), GenerateError> {
    let max = MAX_SIZE as u64;
    if declared_size > max {
        return Err(GenerateError::FileTooLarge {
            path: source.to_path_buf(),
            size: declared_size,
            max,
        });
    }
    Ok(())
}

/// Version string for a checksum: 8 lowercase hex digits, big-endian.
pub fn format_version(checksum: u32) -> String {
    hex::encode(checksum.to_be_bytes())
}

/// Version of an in-memory byte slice, as [`ContentEncoder::encode`] would
/// compute it for a file with the same contents.
pub fn version_of(bytes: &[u8]) -> String {
    let mut hash = Adler32::new();
    hash.write_slice(bytes);
    format_version(hash.checksum())
}
