use crate::app::error::CatError;
use crate::app::models::{FileRecord, RunConfig};
use crate::app::policy::MatchPolicy;
use crate::app::progress::Progress;
use crate::app::tree::render_tree;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

pub const BANNER: &str = "The Source File Contents Are Listed Below, Organized by Extension Under the Respective Heading";

/// Orders records by extension, then by path. Grouping relies on this.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| {
        a.extension
            .cmp(&b.extension)
            .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
    });
}

/// Writes the combined document: tree header, then every file grouped under
/// its extension heading. Returns how many files had to be skipped because
/// they could not be read.
pub fn write_combined<W: Write>(
    out: &mut W,
    records: &[FileRecord],
    tree: &str,
    progress: &mut dyn Progress,
) -> io::Result<usize> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);

    writeln!(out, "Directory Structure:")?;
    writeln!(out, "===================")?;
    writeln!(out, "{}", tree)?;
    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;

    let mut skipped = 0;
    let mut current: Option<&str> = None;
    for record in &sorted {
        progress.advance();

        if current != Some(record.extension.as_str()) {
            current = Some(record.extension.as_str());
            writeln!(out)?;
            writeln!(out, "{} Files:", record.extension.to_uppercase())?;
            writeln!(out, "{}", "=".repeat(record.extension.len() + 7))?;
            writeln!(out)?;
        }

        let content = match fs::read(&record.path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Could not read file {}: {}", record.path.display(), err);
                skipped += 1;
                continue;
            }
        };

        writeln!(out, "// {}", record.path.display())?;
        out.write_all(&content)?;
        writeln!(out)?;
        writeln!(out)?;
    }
    progress.finish();

    Ok(skipped)
}

/// Writes the combined document to `config.output`. A partially written file
/// is removed when the write fails.
pub fn combine_to_file(
    records: &[FileRecord],
    config: &RunConfig,
    progress: &mut dyn Progress,
) -> Result<usize, CatError> {
    let tree = render_tree(&config.root, &MatchPolicy::from_config(config))?;
    let output_error = |source| CatError::Output {
        path: config.output.clone(),
        source,
    };

    let file = File::create(&config.output).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    let result = write_combined(&mut writer, records, &tree, progress)
        .and_then(|skipped| writer.flush().map(|()| skipped));

    match result {
        Ok(skipped) => Ok(skipped),
        Err(source) => {
            drop(writer);
            if let Err(err) = fs::remove_file(&config.output) {
                log::debug!("Could not remove partial output: {}", err);
            }
            Err(output_error(source))
        }
    }
}

/// Builds the same document as [`combine_to_file`] in memory.
pub fn combine_to_string(
    records: &[FileRecord],
    config: &RunConfig,
    progress: &mut dyn Progress,
) -> Result<String, CatError> {
    let tree = render_tree(&config.root, &MatchPolicy::from_config(config))?;
    let mut buf = Vec::new();
    write_combined(&mut buf, records, &tree, progress).map_err(|source| CatError::Output {
        path: config.output.clone(),
        source,
    })?;
    Ok(String::from_utf8(buf)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
