use crate::generator::GenerateError;
use std::path::PathBuf;

/// Package name used when none (or a blank one) is given.
pub const DEFAULT_PACKAGE: &str = "vfs";

// Strict and reserved keywords
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// `PATTERN::TARGETDIR` operands, in order
    pub mappings: Vec<String>,
    /// Artifact path; `None` runs dry
    pub output: Option<PathBuf>,
    /// Module name of the generated store
    pub package: String,
    /// Virtual path used to seed the generated tests
    pub test_file: Option<String>,
    /// Fixed header timestamp; the current time when unset
    pub timestamp: Option<String>,
}

impl GeneratorConfig {
    pub fn new<S: Into<String>>(mappings: impl IntoIterator<Item = S>) -> Self {
        Self {
            mappings: mappings.into_iter().map(Into::into).collect(),
            output: None,
            package: DEFAULT_PACKAGE.to_string(),
            test_file: None,
            timestamp: None,
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = name.into();
        self
    }

    pub fn test_file(mut self, virtual_path: impl Into<String>) -> Self {
        self.test_file = Some(virtual_path.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Trimmed package name, falling back to [`DEFAULT_PACKAGE`] when blank.
    /// The result must be usable as a Rust module name.
    pub fn package_name(&self) -> Result<String, GenerateError> {
        let name = match self.package.trim() {
            "" => DEFAULT_PACKAGE,
            name => name,
        };

        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || name == "_" || KEYWORDS.contains(&name) {
            return Err(GenerateError::InvalidPackageName(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Output path with surrounding whitespace removed; blank means none.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .as_ref()
            .map(|p| p.to_string_lossy().trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}
