use crate::app::cli::Cli;
use crate::app::error::CatError;
use crate::app::models::{ExcludeSet, ExtensionSet, RunConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "combined_files.txt";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub ext: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub out: Option<PathBuf>,
}

pub type Presets = HashMap<String, PresetConfig>;

/// Loads `~/.config/filecat/presets.toml`. No home directory or no file
/// means no presets.
pub fn load_presets_file() -> Result<Presets> {
    let Some(home) = dirs::home_dir() else {
        log::debug!("No home directory, skipping presets");
        return Ok(HashMap::new());
    };
    let config_path = home.join(".config").join("filecat").join("presets.toml");
    load_presets_from(&config_path)
}

pub fn load_presets_from(config_path: &Path) -> Result<Presets> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config at {}", config_path.display()))?;

    let parsed: PresetsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Vec<String>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    combined.extend(cli_vec);
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

/// Merges CLI flags with the selected preset.
///
/// The preset is `--preset` if given, otherwise the one named after the root
/// directory. `--ext` and `--out` replace the preset's values; excludes from
/// both are kept.
pub fn resolve_config(cli: Cli, presets: &Presets) -> Result<RunConfig> {
    let project_name = cli
        .root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));

    let preset_key = cli.preset.as_deref().or(project_name.as_deref());
    if let Some(name) = cli.preset.as_deref() {
        if !presets.contains_key(name) {
            log::warn!("Preset '{}' not found, using command line options only", name);
        }
    }
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    let extensions = match (cli.ext.as_deref(), preset.ext) {
        (Some(raw), _) => ExtensionSet::parse(raw)?,
        (None, Some(list)) => ExtensionSet::from_list(list)?,
        (None, None) => return Err(CatError::NoExtensions.into()),
    };

    let excludes =
        ExcludeSet::with_defaults(merge_vecs(preset.exclude, split_list(cli.exclude.as_deref())));

    let output = cli
        .out
        .or(preset.out)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    Ok(RunConfig {
        root: cli.root,
        extensions,
        excludes,
        output,
        show_tree: cli.tree,
        count_lines: cli.count,
        no_combine: cli.no_combine,
        copy_output: cli.copy,
    })
}
