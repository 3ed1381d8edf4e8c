
use crate::generator::GenerateError;
use crate::vpath::VirtualPath;
use std::path::PathBuf;
use tracing::warn;

/// Separator between the glob pattern and the target directory.
pub const MAPPING_MARKER: &str = "::";

/// One `PATTERN::TARGETDIR` operand after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Filesystem entries matched by the pattern, in sorted order
    pub sources: Vec<PathBuf>,
    /// Cleaned absolute virtual directory (e.g., "/static")
    pub target_dir: String,
    /// The operand as given on the command line
    pub spec: String,
}

/// Split an operand at the last `::` into a trimmed pattern and a cleaned
/// target directory.
pub fn parse_mapping(spec: &str) -> Result<(String, String), GenerateError> {
    let invalid = || GenerateError::InvalidMapping(spec.to_string());

    let (pattern, target_dir) = spec.rsplit_once(MAPPING_MARKER).ok_or_else(invalid)?;
    let pattern = pattern.trim();
    let target_dir = target_dir.trim();

    if pattern.is_empty() || target_dir.is_empty() || !VirtualPath::is_valid_target_dir(target_dir)
    {
        return Err(invalid());
    }

    Ok((pattern.to_string(), VirtualPath::clean(target_dir)))
}

/// Resolve every operand into a [`Mapping`], expanding its glob pattern
/// against the filesystem.
///
/// Operand order is preserved. A pattern that matches nothing yields an
/// empty mapping and a warning.
pub fn resolve_mappings<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Mapping>, GenerateError> {
    specs.iter().map(|spec| resolve_mapping(spec.as_ref())).collect()
}

fn resolve_mapping(spec: &str) -> Result<Mapping, GenerateError> {
    let (pattern, target_dir) = parse_mapping(spec)?;

    let paths = glob::glob(&pattern).map_err(|source| GenerateError::InvalidPattern {
        spec: spec.to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => sources.push(path),
            // Unreadable directories are not matches, same as a shell glob
            Err(err) => warn!("skip unreadable match in {}: {}", spec, err),
        }
    }

    Ok(Mapping {
        sources,
        target_dir,
        spec: spec.to_string(),
    })
}
