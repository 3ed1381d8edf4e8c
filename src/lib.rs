// Public API exports
pub mod assembler;
pub mod config;
pub mod encoder;
pub mod generator;
pub mod golden;
pub mod mapping;
pub mod runtime;
pub mod vpath;
pub mod walker;

// Re-export main types for convenience
pub use config::{GeneratorConfig, DEFAULT_PACKAGE};
pub use generator::{generate, GenerateError, GenerateReport};
pub use mapping::{parse_mapping, resolve_mappings, Mapping};
pub use vpath::VirtualPath;
pub use walker::{FileRecord, ProcessedRegistry, TreeWalker};

pub use assembler::{HeaderData, Renderer, RustRenderer, StoreAssembler};
pub use encoder::{version_of, ContentEncoder, EntrySink};
pub use golden::{test_output_path, GoldenTestEmitter};
