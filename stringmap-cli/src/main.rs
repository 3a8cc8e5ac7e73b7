//! stringmap CLI - generate string lookup maps for prefixed Go constants.
//!
//! Usage, typically from a `//go:generate` directive:
//!
//! ```text
//! stringmap robot.go robot
//! ```
//!
//! Reads `robot.go` from the current directory and writes
//! `robot_stringmap.go` next to it.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Component, Path, PathBuf};

use stringmap_core::{init_logging, log_error, log_info, print_json, print_plain, StringMap};

const USAGE: &str = "usage: stringmap <file.go> <TypeName>  (example: stringmap gopher.go Gopher)";

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate string lookup maps for prefixed Go constants")]
pub struct Cli {
    /// Go source file to scan, relative to the current directory
    file: String,

    /// Constant prefix and value type of the generated map
    type_name: String,

    /// Print the generated source to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// List the extracted constants
    #[arg(long)]
    list: bool,

    /// With --list, print the result as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

/// Rejects input paths that escape the working directory.
///
/// Generation always happens in the current directory, so the input must be
/// a plain relative path without `..` components.
fn validate_input_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Input path contains null bytes"));
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(anyhow!("Input path must be relative, not absolute: {}", path));
    }
    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(anyhow!("Input path must not contain '..': {}", path));
    }
    Ok(p)
}

fn run(cli: &Cli, dir: &Path) -> Result<()> {
    let file = validate_input_path(&cli.file)?;

    let result = StringMap::new(dir, file, cli.type_name.as_str())
        .dry_run(cli.dry_run || cli.list)
        .generate()
        .with_context(|| format!("Failed to generate string map for {}", cli.type_name))?;

    if cli.list {
        if cli.json {
            print_json(&result);
        } else {
            print_plain(&result.pairs);
        }
    } else if cli.dry_run {
        print!("{}", result.source);
    } else {
        log_info(&format!(
            "generated {} ({} constants)",
            result.output_path.display(),
            result.pairs.len()
        ));
    }
    Ok(())
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] stringmap internal error: {}", info);
    }));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let message = e.to_string();
            eprintln!("{}", message.lines().next().unwrap_or_default());
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    init_logging(cli.log_json);

    let outcome = std::env::current_dir()
        .context("Failed to read the current directory")
        .and_then(|dir| run(&cli, &dir));

    if let Err(e) = outcome {
        log_error(&format!("{:#}", e));
        eprintln!("error: {:#}", e);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
}
