use std::path::PathBuf;

use clap::Parser;

/// Changelog read when `--changelog` is not given, relative to the site root.
pub const DEFAULT_CHANGELOG: &str = "../pika/CHANGELOG.md";
/// Page written when `--target` is not given, relative to the site root.
pub const DEFAULT_TARGET: &str = "pika/changelog.html";

/// Build the PIKA changelog page.
#[derive(Parser, Debug)]
#[command(name = "aidoo_changelog", version, about = "Build PIKA changelog page")]
pub struct Cli {
    /// Path to CHANGELOG.md.
    #[arg(long, default_value = DEFAULT_CHANGELOG)]
    pub changelog: PathBuf,

    /// HTML page containing the changelog markers.
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Print the rendered fragment to stdout instead of writing the page.
    #[arg(long)]
    pub print: bool,
}
