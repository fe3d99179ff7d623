use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "filecat",
    author,
    version,
    about = "Combine source files into one document, grouped by extension",
    after_help = "Examples:
  filecat -e go
  filecat -e java -r ./project/src -t -o combined_java.txt
  filecat -e js -r ./web/scripts -c --no-combine
  filecat -e py -t -y
  filecat -e cpp -x tests,vendor,third_party"
)]
pub struct Cli {
    /// File extension(s) to search for, comma-separated ("none" matches all files)
    #[arg(short = 'e', long)]
    pub ext: Option<String>,

    /// Directories to exclude, comma-separated. Always excluded: .git, .idea,
    /// .vscode, node_modules, build, dist
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Root directory to start the search from
    #[arg(short = 'r', long, default_value = ".")]
    pub root: PathBuf,

    /// Output file name [default: combined_files.txt]
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Count lines of code and display the total
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Do not write the combined output file
    #[arg(long)]
    pub no_combine: bool,

    /// Show the directory tree of matching files
    #[arg(short = 't', long)]
    pub tree: bool,

    /// Copy the combined output to the clipboard
    #[arg(short = 'y', long)]
    pub copy: bool,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}
