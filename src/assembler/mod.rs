mod render;


pub use render::{HeaderData, Renderer, RustRenderer, BYTES_PER_LINE};

use crate::encoder::EntrySink;
use std::io::{self, Write};

/// Sequential writer for a generated store: header, entries, footer.
///
/// The assembler performs no validation of its own; callers drive it in
/// order and it forwards every piece to its [`Renderer`].
pub struct StoreAssembler<W: Write> {
    out: W,
    renderer: Box<dyn Renderer>,
    /// Bytes written on the current line of the current entry
    column: usize,
    entries: usize,
}

impl<W: Write> StoreAssembler<W> {
    pub fn new(out: W, renderer: Box<dyn Renderer>) -> Self {
        Self {
            out,
            renderer,
            column: 0,
            entries: 0,
        }
    }

    /// Assembler that emits Rust source
    pub fn rust(out: W) -> Self {
        Self::new(out, Box::new(RustRenderer))
    }

    pub fn write_header(&mut self, header: &HeaderData) -> io::Result<()> {
        self.renderer.header(&mut self.out, header)
    }

    pub fn write_footer(&mut self) -> io::Result<()> {
        self.renderer.footer(&mut self.out)
    }

    /// Number of completed entries
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EntrySink for StoreAssembler<W> {
    fn begin_entry(&mut self, virtual_path: &str) -> io::Result<()> {
        self.column = 0;
        self.renderer.entry_start(&mut self.out, virtual_path)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.renderer
            .entry_bytes(&mut self.out, bytes, &mut self.column)
    }

    fn end_entry(&mut self, version: &str) -> io::Result<()> {
        self.renderer
            .entry_end(&mut self.out, version, self.column)?;
        self.entries += 1;
        Ok(())
    }
}
