use std::path::Path;

/// Slash-separated path helpers for virtual paths.
///
/// Virtual paths never touch the host filesystem, so all operations here are
/// purely lexical and independent of the platform separator.
pub struct VirtualPath;

impl VirtualPath {
    /// Lexically clean a slash path:
    /// - Repeated separators collapse into one
    /// - `.` segments are dropped
    /// - `..` removes the preceding segment (and is dropped at the root)
    ///
    /// An empty input cleans to `"."`, a bare root to `"/"`.
    pub fn clean(raw: &str) -> String {
        if raw.is_empty() {
            return ".".to_string();
        }

        let rooted = raw.starts_with('/');
        let mut segments: Vec<&str> = Vec::new();

        for segment in raw.split('/') {
            match segment {
                "" | "." => continue,
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ if rooted => {}
                    _ => segments.push(".."),
                },
                part => segments.push(part),
            }
        }

        let joined = segments.join("/");
        match (rooted, joined.is_empty()) {
            (true, _) => format!("/{}", joined),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        }
    }

    /// Join segments with `/` and clean the result.
    ///
    /// Empty segments are ignored; if every segment is empty the result is
    /// the empty string.
    pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
        let parts: Vec<&str> = segments
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return String::new();
        }

        Self::clean(&parts.join("/"))
    }

    /// Whether `raw` is usable as a mapping target directory: absolute and
    /// free of backslashes.
    pub fn is_valid_target_dir(raw: &str) -> bool {
        raw.starts_with('/') && !raw.contains('\\')
    }

    /// Convert a relative host path into slash form.
    ///
    /// Components that are not valid UTF-8 are converted lossily.
    pub fn from_host_relative(path: &Path) -> String {
        path.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Last element of a host path, as used for the walk root segment.
    ///
    /// Trailing separators are ignored; `"."`, `".."` and the root keep
    /// their literal spelling.
    pub fn host_base_name(path: &Path) -> String {
        match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                let raw = path.to_string_lossy();
                let trimmed = raw.trim_end_matches(['/', '\\']);
                if trimmed.is_empty() {
                    "/".to_string()
                } else {
                    trimmed
                        .rsplit(['/', '\\'])
                        .next()
                        .unwrap_or(trimmed)
                        .to_string()
                }
            }
        }
    }
}
