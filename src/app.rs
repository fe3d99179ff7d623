// Declare modules
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod counter;
pub mod error;
pub mod formatter;
pub mod models;
pub mod policy;
pub mod progress;
pub mod scanner;
pub mod traversal;
pub mod tree;

use anyhow::{Context, Result};
use clap::Parser;

use self::cli::Cli;
use self::clipboard::{copy_file_to_clipboard, Clipboard, SystemClipboard};
use self::config::{load_presets_file, resolve_config};
use self::error::CatError;
use self::formatter::{combine_to_file, combine_to_string};
use self::models::RunConfig;
use self::policy::MatchPolicy;
use self::progress::{Progress, StderrProgress};
use self::scanner::Scanner;
use self::tree::render_tree;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let presets = load_presets_file()?;
    let config = resolve_config(args, &presets)?;

    // 3. Scan, render, combine
    execute(&config, &mut SystemClipboard)
}

/// Runs one invocation against a resolved configuration.
pub fn execute(config: &RunConfig, clipboard: &mut dyn Clipboard) -> Result<()> {
    if config.extensions.is_all() {
        log::info!("Searching for all non-hidden files");
    } else {
        log::info!("Searching for {}", config.extensions);
    }
    log::info!("Excluding directories: {}", config.excludes.patterns().join(", "));

    let mut progress = StderrProgress::new("Searching files...");
    let files = Scanner::new(config)
        .scan(&mut progress)
        .context("Error finding files")?;
    progress.finish();

    if files.is_empty() {
        return Err(CatError::NoFilesFound(config.extensions.to_string()).into());
    }

    let total_lines: usize = files.iter().map(|f| f.line_count).sum();

    if config.show_tree {
        let tree = render_tree(&config.root, &MatchPolicy::from_config(config))?;
        println!("\nThis is the Directory Structure:");
        println!("=====================");
        println!("{}", tree);
    }

    if config.count_lines {
        println!(
            "Found {} files with a total of {} lines of code",
            files.len(),
            total_lines
        );
    }

    if config.no_combine {
        if config.copy_output {
            let mut progress = StderrProgress::new("Processing files...");
            let content = combine_to_string(&files, config, &mut progress)
                .context("Error generating content")?;
            report_clipboard(clipboard.set_text(&content));
        }
        return Ok(());
    }

    let mut progress = StderrProgress::new("Combining files...");
    combine_to_file(&files, config, &mut progress).context("Error combining files")?;

    if config.copy_output {
        report_clipboard(copy_file_to_clipboard(&config.output, clipboard));
    }

    println!(
        "Combined {} files into {} with a total of {} lines of code.",
        files.len(),
        config.output.display(),
        total_lines
    );

    Ok(())
}

fn report_clipboard(result: Result<()>) {
    match result {
        Ok(()) => log::info!("Content copied to clipboard"),
        Err(err) => log::warn!("Error copying to clipboard: {:#}", err),
    }
}
