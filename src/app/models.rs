use crate::app::error::CatError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directories skipped on every run, in addition to user supplied excludes.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "node_modules",
    "build",
    "dist",
];

/// Value of `--ext` that selects every non-hidden file.
pub const MATCH_ALL: &str = "none";

/// Extensions a file must carry to be picked up, or every non-hidden file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionSet {
    All,
    Only(Vec<String>),
}

impl ExtensionSet {
    /// Parses the comma separated form accepted on the command line.
    pub fn parse(raw: &str) -> Result<Self, CatError> {
        Self::from_list(raw.split(','))
    }

    pub fn from_list<I, S>(items: I) -> Result<Self, CatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if raw.len() == 1 && raw[0] == MATCH_ALL {
            return Ok(ExtensionSet::All);
        }

        let mut normalized: Vec<String> = Vec::with_capacity(raw.len());
        for ext in raw.iter().map(|e| normalize_extension(e)) {
            // "." on its own would never match anything
            if ext.len() > 1 && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        if normalized.is_empty() {
            return Err(CatError::NoExtensions);
        }
        Ok(ExtensionSet::Only(normalized))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ExtensionSet::All)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionSet::All => write!(f, "all files"),
            ExtensionSet::Only(exts) => write!(f, "{}", exts.join(", ")),
        }
    }
}

/// Prefixes the extension separator if missing. Idempotent.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Substrings that exclude any directory whose path contains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    patterns: Vec<String>,
}

impl ExcludeSet {
    /// User values come first, followed by `defaults`. Empty entries are dropped
    /// since an empty substring would exclude everything.
    pub fn new<I, S>(defaults: &[&str], user: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = Vec::new();
        let user = user.into_iter().map(|s| s.as_ref().trim().to_string());
        for pattern in user.chain(defaults.iter().map(|d| d.to_string())) {
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Self { patterns }
    }

    pub fn with_defaults<I, S>(user: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(DEFAULT_EXCLUDES, user)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.patterns.iter().any(|p| path.contains(p.as_str()))
    }
}

/// A file that passed the filters, with its line count taken at discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub extension: String,
    pub line_count: usize,
}

/// Everything a run needs, resolved from the CLI and presets.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub excludes: ExcludeSet,
    pub output: PathBuf,
    pub show_tree: bool,
    pub count_lines: bool,
    pub no_combine: bool,
    pub copy_output: bool,
}

/// One row of the rendered directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub level: usize,
    pub label: String,
}
