use crate::app::models::{ExcludeSet, ExtensionSet, RunConfig};
use std::path::Path;

/// Decides which directories are pruned and which files are picked up.
///
/// Every traversal goes through the same policy so the file list and the
/// rendered tree can never disagree about what matches.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    excludes: ExcludeSet,
    extensions: ExtensionSet,
}

impl MatchPolicy {
    pub fn new(excludes: ExcludeSet, extensions: ExtensionSet) -> Self {
        Self {
            excludes,
            extensions,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.excludes.clone(), config.extensions.clone())
    }

    pub fn is_dir_excluded(&self, path: &Path) -> bool {
        self.excludes.matches(path)
    }

    /// Returns the matched extension when the file should be included.
    ///
    /// In match-all mode any file whose name does not start with `.` matches,
    /// and the extension may be empty.
    pub fn is_file_match(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        let ext = extension_of(&name);

        match &self.extensions {
            ExtensionSet::All => {
                if name.starts_with('.') {
                    None
                } else {
                    Some(ext.to_string())
                }
            }
            ExtensionSet::Only(exts) => exts.iter().find(|e| e.as_str() == ext).cloned(),
        }
    }
}

/// Everything from the last `.` of a file name, or "" when there is none.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |i| &name[i..])
}
