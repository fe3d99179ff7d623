//! Depth-first walk shared by every consumer of the directory tree.
//!
//! The walk owns pruning and matching; callers only see the directories that
//! survived exclusion and the files the policy accepted.

use crate::app::error::CatError;
use crate::app::policy::MatchPolicy;
use crate::app::progress::Progress;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Hooks invoked in traversal order. `depth` is 0 for the root.
pub trait Visitor {
    fn on_directory(&mut self, path: &Path, depth: usize);

    fn on_file(&mut self, path: &Path, depth: usize, extension: &str);
}

/// Walks `root`, siblings in file-name order.
///
/// Paths handed to the visitor are cleaned, so walking `.` yields `a.go`
/// rather than `./a.go`. Excluded directories are never entered; the
/// exclusion substrings are tested against the cleaned walked path, root
/// prefix included, but the root itself is never excluded. Only an
/// unreadable root is fatal; an entry that fails further down is logged and
/// skipped.
pub fn traverse<V: Visitor + ?Sized>(
    root: &Path,
    policy: &MatchPolicy,
    visitor: &mut V,
    progress: &mut dyn Progress,
) -> Result<(), CatError> {
    fs::read_dir(root).map_err(|source| CatError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let prune = policy.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let excluded = entry.depth() > 0
                && is_dir(entry)
                && prune.is_dir_excluded(&clean_path(entry.path()));
            !excluded
        })
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Error walking entry: {}", err);
                continue;
            }
        };
        progress.advance();

        let depth = entry.depth();
        let path = clean_path(entry.path());
        if is_dir(&entry) {
            log::debug!("Entering {}", path.display());
            visitor.on_directory(&path, depth);
        } else if let Some(ext) = policy.is_file_match(&path) {
            visitor.on_file(&path, depth, &ext);
        }
    }

    Ok(())
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}

/// Drops `.` components; a path made only of them becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::models::{ExcludeSet, ExtensionSet};
    use std::fs;

    #[derive(Default)]
    struct Recorder {
        dirs: Vec<(PathBuf, usize)>,
        files: Vec<(PathBuf, usize, String)>,
    }

    impl Visitor for Recorder {
        fn on_directory(&mut self, path: &Path, depth: usize) {
            self.dirs.push((path.to_path_buf(), depth));
        }

        fn on_file(&mut self, path: &Path, depth: usize, extension: &str) {
            self.files
                .push((path.to_path_buf(), depth, extension.to_string()));
        }
    }

    #[derive(Default)]
    pub(crate) struct Ticks(pub(crate) usize);

    impl Progress for Ticks {
        fn advance(&mut self) {
            self.0 += 1;
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn policy(exts: &str) -> MatchPolicy {
        MatchPolicy::new(
            ExcludeSet::with_defaults(Vec::<String>::new()),
            ExtensionSet::parse(exts).unwrap(),
        )
    }

    #[test]
    fn test_excluded_subtree_is_never_visited() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj");
        write(&root, "node_modules/x.go", "package x\n");
        write(&root, "node_modules/deep/z.go", "package z\n");
        write(&root, "y.go", "package y\n");

        let mut recorder = Recorder::default();
        let mut ticks = Ticks::default();
        traverse(&root, &policy("go"), &mut recorder, &mut ticks).unwrap();

        // root and y.go only
        assert_eq!(ticks.0, 2);
        assert_eq!(recorder.dirs, vec![(root.clone(), 0)]);
        assert_eq!(recorder.files.len(), 1);
        assert_eq!(recorder.files[0].0, root.join("y.go"));
        let visited = recorder
            .dirs
            .iter()
            .map(|(p, _)| p)
            .chain(recorder.files.iter().map(|(p, _, _)| p));
        for path in visited {
            assert!(!path.to_string_lossy().contains("node_modules"));
        }
    }

    #[test]
    fn test_depth_first_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj");
        write(&root, "b.go", "");
        write(&root, "a/c.go", "");
        write(&root, "a/b/d.go", "");
        write(&root, "z.txt", "");

        let mut recorder = Recorder::default();
        traverse(&root, &policy("go"), &mut recorder, &mut Ticks::default()).unwrap();

        let files: Vec<_> = recorder
            .files
            .iter()
            .map(|(p, depth, _)| (p.strip_prefix(&root).unwrap().to_path_buf(), *depth))
            .collect();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("a/b/d.go"), 3),
                (PathBuf::from("a/c.go"), 2),
                (PathBuf::from("b.go"), 1),
            ]
        );
    }

    #[test]
    fn test_root_itself_is_never_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("build").join("proj");
        write(&root, "main.go", "");
        write(&root, "sub/nested.go", "");

        let mut recorder = Recorder::default();
        traverse(&root, &policy("go"), &mut recorder, &mut Ticks::default()).unwrap();

        // Subdirectories are tested on their full walked path, which contains "build"
        assert_eq!(recorder.dirs, vec![(root.clone(), 0)]);
        assert_eq!(recorder.files.len(), 1);
        assert_eq!(recorder.files[0].0, root.join("main.go"));
    }

    #[test]
    fn test_exclusion_sees_root_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("src");
        write(&root, "gen/g.go", "package gen\n");
        write(&root, "m.go", "package m\n");

        let policy = MatchPolicy::new(
            ExcludeSet::with_defaults(["src/gen"]),
            ExtensionSet::parse("go").unwrap(),
        );
        let mut recorder = Recorder::default();
        traverse(&root, &policy, &mut recorder, &mut Ticks::default()).unwrap();

        let files: Vec<_> = recorder.files.iter().map(|(p, _, _)| p.clone()).collect();
        assert_eq!(files, vec![root.join("m.go")]);
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("./a.go")), PathBuf::from("a.go"));
        assert_eq!(clean_path(Path::new("./sub/./s.go")), PathBuf::from("sub/s.go"));
        assert_eq!(clean_path(Path::new("src/")), PathBuf::from("src"));
        assert_eq!(clean_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = traverse(
            &dir.path().join("missing"),
            &policy("go"),
            &mut Recorder::default(),
            &mut Ticks::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatError::RootUnreadable { .. }));
    }
}
