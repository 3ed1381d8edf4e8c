mod error;
mod output;


pub use error::GenerateError;
pub use output::PendingOutput;

use crate::assembler::{HeaderData, StoreAssembler};
use crate::config::GeneratorConfig;
use crate::golden::{test_output_path, GoldenTestEmitter};
use crate::mapping::resolve_mappings;
use crate::vpath::VirtualPath;
use crate::walker::{ProcessedRegistry, TreeWalker};
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a successful run
#[derive(Debug)]
pub struct GenerateReport {
    /// Every file that was embedded (or validated, in a dry run)
    pub registry: ProcessedRegistry,
    /// Path of the written artifact; `None` for a dry run
    pub output: Option<PathBuf>,
    /// Path of the written test file, if one was requested
    pub test_output: Option<PathBuf>,
}

impl GenerateReport {
    pub fn is_dry_run(&self) -> bool {
        self.output.is_none()
    }
}

/// Run a whole generation: resolve mappings, walk and encode every source,
/// and write the artifact plus the optional test file.
///
/// Outputs only appear at their final paths once every step succeeded.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    let package = config.package_name()?;
    let mappings = resolve_mappings(&config.mappings)?;
    let test_seed = config
        .test_file
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(VirtualPath::clean);

    let Some(output) = config.output_path() else {
        let mut walker = TreeWalker::dry_run();
        walker.walk_mappings(&mappings)?;
        if let Some(seed) = test_seed {
            warn!("ignoring test file without output: {}", seed);
        }
        return Ok(GenerateReport {
            registry: walker.into_registry(),
            output: None,
            test_output: None,
        });
    };

    let (artifact, file) = PendingOutput::create(&output)?;
    let write_err = |e| GenerateError::io("could not write", &output, e);

    let mut assembler = StoreAssembler::rust(BufWriter::new(file));
    let header = HeaderData {
        package: package.clone(),
        timestamp: config
            .timestamp
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    };
    assembler.write_header(&header).map_err(write_err)?;

    let mut walker = TreeWalker::new(&mut assembler);
    walker.walk_mappings(&mappings)?;
    let registry = walker.into_registry();

    assembler.write_footer().map_err(write_err)?;
    debug!("wrote {} entries", assembler.entry_count());
    assembler.finish().map_err(write_err)?;

    let tests = match test_seed {
        Some(seed) => Some(write_tests(&output, &package, &registry, &seed)?),
        None => None,
    };

    // Test file first: if the artifact cannot be moved into place, the
    // committed test file is removed again and nothing is left behind
    let test_output = tests.map(PendingOutput::commit).transpose()?;
    let output = match artifact.commit() {
        Ok(path) => path,
        Err(err) => {
            if let Some(path) = &test_output {
                let _ = fs::remove_file(path);
            }
            return Err(err);
        }
    };

    info!("generated {}", output.display());
    if let Some(path) = &test_output {
        info!("generated {}", path.display());
    }

    Ok(GenerateReport {
        registry,
        output: Some(output),
        test_output,
    })
}

/// Render the golden tests for `seed` next to the artifact
fn write_tests(
    output: &Path,
    package: &str,
    registry: &ProcessedRegistry,
    seed: &str,
) -> Result<PendingOutput, GenerateError> {
    let record = registry
        .get(seed)
        .ok_or_else(|| GenerateError::TestFileNotFound(seed.to_string()))?;

    let path = test_output_path(output);
    let module = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("{}_test", package));

    let (pending, file) = PendingOutput::create(&path)?;
    let write_err = |e| GenerateError::io("could not write", pending.path(), e);

    let mut out = BufWriter::new(file);
    GoldenTestEmitter::new(package, record)
        .render(&mut out, &module)
        .map_err(write_err)?;
    out.flush().map_err(write_err)?;

    Ok(pending)
}
