use crate::app::counter::count_lines;
use crate::app::error::CatError;
use crate::app::models::{FileRecord, RunConfig};
use crate::app::policy::MatchPolicy;
use crate::app::progress::Progress;
use crate::app::traversal::{traverse, Visitor};
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    policy: MatchPolicy,
}

impl Scanner {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            root: config.root.clone(),
            policy: MatchPolicy::from_config(config),
        }
    }

    /// Collects every matching file with its line count, in traversal order.
    /// Files whose lines cannot be counted are left out.
    pub fn scan(&self, progress: &mut dyn Progress) -> Result<Vec<FileRecord>, CatError> {
        let mut collector = RecordCollector::default();
        traverse(&self.root, &self.policy, &mut collector, progress)?;
        Ok(collector.records)
    }
}

#[derive(Default)]
struct RecordCollector {
    records: Vec<FileRecord>,
}

impl Visitor for RecordCollector {
    fn on_directory(&mut self, _path: &Path, _depth: usize) {}

    fn on_file(&mut self, path: &Path, _depth: usize, extension: &str) {
        match count_lines(path) {
            Ok(line_count) => self.records.push(FileRecord {
                path: path.to_path_buf(),
                extension: extension.to_string(),
                line_count,
            }),
            Err(err) => log::warn!("Could not count lines in {}: {}", path.display(), err),
        }
    }
}
