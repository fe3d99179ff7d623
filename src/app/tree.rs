use crate::app::error::CatError;
use crate::app::models::TreeLine;
use crate::app::policy::MatchPolicy;
use crate::app::progress::NoProgress;
use crate::app::traversal::{traverse, Visitor};
use std::path::Path;

const INDENT: &str = "    ";

/// Renders the directories that survive exclusion and the files that match,
/// one entry per line.
pub fn render_tree(root: &Path, policy: &MatchPolicy) -> Result<String, CatError> {
    let mut collector = TreeCollector::default();
    traverse(root, policy, &mut collector, &mut NoProgress)?;
    Ok(render_lines(&collector.lines))
}

pub fn render_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(|line| {
            if line.level == 0 {
                line.label.clone()
            } else {
                format!("{}|- {}", INDENT.repeat(line.level), line.label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Default)]
struct TreeCollector {
    lines: Vec<TreeLine>,
}

impl TreeCollector {
    fn push(&mut self, path: &Path, level: usize) {
        let label = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        self.lines.push(TreeLine { level, label });
    }
}

impl Visitor for TreeCollector {
    fn on_directory(&mut self, path: &Path, depth: usize) {
        self.push(path, depth);
    }

    fn on_file(&mut self, path: &Path, depth: usize, _extension: &str) {
        self.push(path, depth);
    }
}
