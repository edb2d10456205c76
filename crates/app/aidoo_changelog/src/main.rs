//! Renders the PIKA changelog into the site's changelog page.
//!
//! ```text
//! aidoo_changelog
//! aidoo_changelog --changelog path/to/CHANGELOG.md
//! ```

// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use aidoo_core::changelog;
use clap::Parser;
use cli::Cli;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    // Fatal errors bypass the log filter so RUST_LOG cannot silence them.
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    if args.print {
        println!("{}", changelog::render_file(&args.changelog)?);
        return Ok(());
    }

    if changelog::inject_file(&args.changelog, &args.target)? {
        println!("Changelog injected into {}", args.target.display());
    } else {
        println!("Changelog already up-to-date in {}", args.target.display());
    }

    Ok(())
}
