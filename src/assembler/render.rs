use crate::runtime::RUNTIME_SOURCE;
use std::io::{self, Write};

/// Byte values emitted per line of an entry's byte list.
pub const BYTES_PER_LINE: usize = 16;

/// Structured data for the artifact header
#[derive(Debug, Clone)]
pub struct HeaderData {
    /// Module name of the generated store (e.g., "vfs")
    pub package: String,
    /// RFC 3339 generation time
    pub timestamp: String,
}

/// Renders a store artifact in some target syntax.
///
/// Calls arrive strictly in order: `header`, then for each entry
/// `entry_start`, any number of `entry_bytes`, `entry_end`, and finally
/// `footer`. Renderers hold no per-run state; the byte column is threaded
/// through by the caller.
pub trait Renderer {
    fn header(&self, out: &mut dyn Write, header: &HeaderData) -> io::Result<()>;
    fn entry_start(&self, out: &mut dyn Write, virtual_path: &str) -> io::Result<()>;
    fn entry_bytes(&self, out: &mut dyn Write, bytes: &[u8], column: &mut usize)
        -> io::Result<()>;
    fn entry_end(&self, out: &mut dyn Write, version: &str, column: usize) -> io::Result<()>;
    fn footer(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Emits a self-contained Rust module: the runtime followed by a static
/// entry table.
pub struct RustRenderer;

impl RustRenderer {
    const TABLE_INDENT: &'static str = "                ";
}

impl Renderer for RustRenderer {
    fn header(&self, out: &mut dyn Write, header: &HeaderData) -> io::Result<()> {
        writeln!(out, "// Code generated with embedvfs. DO NOT EDIT.")?;
        writeln!(out, "// Generated at: {}", header.timestamp)?;
        writeln!(out)?;
        writeln!(
            out,
            "//! Module `{}` provides an embedded virtual file system.",
            header.package
        )?;
        writeln!(out, "//!")?;
        writeln!(
            out,
            "//! Open files with [`open`]; handles implement `std::io::Read` and `std::io::Seek`."
        )?;
        writeln!(out)?;
        writeln!(out, "#![allow(dead_code)]")?;
        writeln!(out)?;
        out.write_all(RUNTIME_SOURCE.as_bytes())?;
        writeln!(out)?;
        out.write_all(STORE_API.as_bytes())?;
        writeln!(out, "static ENTRIES: &[(&str, Entry)] = &[")
    }

    fn entry_start(&self, out: &mut dyn Write, virtual_path: &str) -> io::Result<()> {
        writeln!(out, "    (")?;
        // Debug formatting of str is a valid Rust string literal
        writeln!(out, "        {:?},", virtual_path)?;
        writeln!(out, "        Entry::new(")?;
        write!(out, "            &[")
    }

    fn entry_bytes(
        &self,
        out: &mut dyn Write,
        bytes: &[u8],
        column: &mut usize,
    ) -> io::Result<()> {
        for b in bytes {
            if *column % BYTES_PER_LINE == 0 {
                write!(out, "\n{}", Self::TABLE_INDENT)?;
            } else {
                write!(out, " ")?;
            }
            write!(out, "{},", b)?;
            *column += 1;
        }
        Ok(())
    }

    fn entry_end(&self, out: &mut dyn Write, version: &str, column: usize) -> io::Result<()> {
        if column > 0 {
            write!(out, "\n            ")?;
        }
        writeln!(out, "],")?;
        writeln!(out, "            {:?},", version)?;
        writeln!(out, "        ),")?;
        writeln!(out, "    ),")
    }

    fn footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "];")
    }
}

const STORE_API: &str = r#"static STORE: std::sync::LazyLock<Store> =
    std::sync::LazyLock::new(|| Store::new(ENTRIES));

/// Open an embedded file. If `version` is not empty it must match the
/// version of the file.
pub fn open(path: &str, version: &str) -> Result<File, Error> {
    STORE.open(path, version)
}

/// Paths of all embedded files, sorted.
pub fn paths() -> Vec<&'static str> {
    STORE.paths()
}

"#;
