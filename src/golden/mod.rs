
use crate::walker::FileRecord;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Marker replaced in the output path to name the test file.
const SOURCE_EXTENSION: &str = ".rs";
const TEST_EXTENSION: &str = "_test.rs";

/// Path of the generated test file for an artifact at `output`.
///
/// The first occurrence of `.rs` anywhere in the path is replaced, so
/// `gen.rs.d/vfs.rs` becomes `gen_test.rs.d/vfs.rs`. A path without `.rs`
/// gets the suffix appended instead of overwriting the artifact.
pub fn test_output_path(output: &Path) -> PathBuf {
    let raw = output.to_string_lossy();
    if raw.contains(SOURCE_EXTENSION) {
        PathBuf::from(raw.replacen(SOURCE_EXTENSION, TEST_EXTENSION, 1))
    } else {
        PathBuf::from(format!("{}{}", raw, TEST_EXTENSION))
    }
}

/// Emits smoke tests that pin one embedded file's path, version and size.
pub struct GoldenTestEmitter<'a> {
    package: &'a str,
    record: &'a FileRecord,
}

impl<'a> GoldenTestEmitter<'a> {
    pub fn new(package: &'a str, record: &'a FileRecord) -> Self {
        Self { package, record }
    }

    /// Render the test module. `module` is the name the test file will be
    /// declared under, used only in its documentation.
    pub fn render(&self, out: &mut dyn Write, module: &str) -> io::Result<()> {
        writeln!(out, "// Code generated with embedvfs. DO NOT EDIT.")?;
        writeln!(out)?;
        writeln!(
            out,
            "//! Smoke tests for the embedded `{}` module.",
            self.package
        )?;
        writeln!(out, "//!")?;
        writeln!(
            out,
            "//! Declare next to the module: `#[cfg(test)] mod {};`",
            module
        )?;
        writeln!(out)?;
        writeln!(out, "use super::{}::{{open, Error, Whence}};", self.package)?;
        writeln!(out)?;
        writeln!(out, "const PATH: &str = {:?};", self.record.virtual_path)?;
        writeln!(out, "const VERSION: &str = {:?};", self.record.version)?;
        writeln!(out, "const SIZE: i64 = {};", self.record.size)?;
        out.write_all(TEST_BODY.as_bytes())
    }
}

const TEST_BODY: &str = r#"
#[test]
fn test_path() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.path(), PATH);
}

#[test]
fn test_version() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.version(), VERSION);
}

#[test]
fn test_size() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.size(), SIZE);
}

#[test]
fn test_reader() {
    let mut file = open(PATH, VERSION).unwrap();
    let mut buf = vec![0u8; SIZE as usize];
    let read = match file.read(&mut buf) {
        Ok(n) => n,
        Err(Error::EndOfStream) => 0,
        Err(err) => panic!("unexpected error: {}", err),
    };
    assert_eq!(read as i64, SIZE);
}

#[test]
fn test_seeker() {
    let mut file = open(PATH, VERSION).unwrap();
    assert_eq!(file.seek(0, Whence::FromEnd).unwrap(), SIZE);
}
"#;
