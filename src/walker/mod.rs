mod registry;


pub use registry::{FileRecord, ProcessedRegistry};

use crate::encoder::{ContentEncoder, EntrySink};
use crate::generator::GenerateError;
use crate::mapping::Mapping;
use crate::vpath::VirtualPath;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Walks mapped sources and feeds every regular file to the encoder.
///
/// Without a sink the walker runs dry: paths and collisions are still
/// checked, but no file is read and every version is empty.
pub struct TreeWalker<'a> {
    sink: Option<&'a mut dyn EntrySink>,
    encoder: ContentEncoder,
    registry: ProcessedRegistry,
}

impl<'a> TreeWalker<'a> {
    pub fn new(sink: &'a mut dyn EntrySink) -> Self {
        Self::with_sink(Some(sink))
    }

    /// Walker that validates without writing anything
    pub fn dry_run() -> Self {
        Self::with_sink(None)
    }

    fn with_sink(sink: Option<&'a mut dyn EntrySink>) -> Self {
        Self {
            sink,
            encoder: ContentEncoder::new(),
            registry: ProcessedRegistry::new(),
        }
    }

    /// Process every source of every mapping, in order
    pub fn walk_mappings(&mut self, mappings: &[Mapping]) -> Result<(), GenerateError> {
        for mapping in mappings {
            self.walk_mapping(mapping)?;
        }
        Ok(())
    }

    pub fn walk_mapping(&mut self, mapping: &Mapping) -> Result<(), GenerateError> {
        if mapping.sources.is_empty() {
            warn!("skip mapping, no matches: {}", mapping.spec);
        }

        for source in &mapping.sources {
            let metadata = fs::metadata(source)
                .map_err(|e| GenerateError::io("stat error", source, e))?;

            if metadata.is_file() || metadata.is_dir() {
                self.walk_source(&mapping.target_dir, source)?;
            } else {
                warn!(
                    "skip source, not a regular file or directory: {}",
                    source.display()
                );
            }
        }
        Ok(())
    }

    /// Walk one matched file or directory below `target_dir`
    fn walk_source(&mut self, target_dir: &str, root: &Path) -> Result<(), GenerateError> {
        let base = VirtualPath::host_base_name(root);

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| GenerateError::Walk {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(root).unwrap_or(Path::new(""));
            let target = VirtualPath::join(&[
                target_dir,
                base.as_str(),
                VirtualPath::from_host_relative(rel).as_str(),
            ]);

            let size = entry
                .metadata()
                .map_err(|e| GenerateError::Walk {
                    path: entry.path().to_path_buf(),
                    source: e,
                })?
                .len();

            self.embed_file(&target, entry.path(), size)?;
        }
        Ok(())
    }

    fn embed_file(&mut self, target: &str, source: &Path, size: u64) -> Result<(), GenerateError> {
        self.registry.ensure_vacant(target, source)?;

        info!("{} -> {}", source.display(), target);

        let version = match self.sink.as_deref_mut() {
            Some(sink) => self.encoder.encode(sink, target, source, size)?,
            None => String::new(),
        };

        self.registry.register(FileRecord {
            virtual_path: target.to_string(),
            source: source.to_path_buf(),
            size,
            version,
        })
    }

    pub fn registry(&self) -> &ProcessedRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> ProcessedRegistry {
        self.registry
    }
}
