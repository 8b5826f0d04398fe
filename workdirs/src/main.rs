//! Prepare the shared `input/` and `output/` directories of a project.
//!
//! By default the project is the directory this crate was built from. Pass
//! `--anchor` to locate it from another source file instead.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use workdirs::config::{ModuleLocation, WorkDirs};
use workdirs::io::init::initialize;
use workdirs::{WorkDirsError, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "workdirs",
    version,
    about = "Prepare the shared input/output directories of a project"
)]
struct Cli {
    /// Source file whose grandparent directory is the project root.
    #[arg(long, global = true, value_name = "PATH")]
    anchor: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `input/` and `output/` under the project root if missing.
    Init,
    /// Print the resolved directories without touching the filesystem.
    Show {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Toml,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let location = cli
        .anchor
        .map(ModuleLocation::new)
        .unwrap_or_else(ModuleLocation::source);
    match cli.command {
        Command::Init => cmd_init(&location),
        Command::Show { format } => cmd_show(&location, format),
    }
}

fn cmd_init(location: &ModuleLocation) -> Result<()> {
    let initialized = initialize(location).context("initialize work directories")?;
    let statuses = [initialized.report.input, initialized.report.output];
    for ((name, path), status) in initialized.dirs.children().into_iter().zip(statuses) {
        println!("init: {}={} status={}", name, path.display(), status.as_str());
    }
    Ok(())
}

fn cmd_show(location: &ModuleLocation, format: Format) -> Result<()> {
    let dirs = WorkDirs::resolve(location).context("resolve work directories")?;
    print!("{}", render(&dirs, format)?);
    Ok(())
}

/// Render `dirs` with a trailing newline.
fn render(dirs: &WorkDirs, format: Format) -> Result<String> {
    let mut out = match format {
        Format::Text => format!(
            "base_dir={}\ninput_dir={}\noutput_dir={}",
            dirs.base_dir.display(),
            dirs.input_dir.display(),
            dirs.output_dir.display()
        ),
        Format::Json => serde_json::to_string_pretty(dirs).context("serialize json")?,
        Format::Toml => {
            let mut buf = toml::to_string_pretty(dirs).context("serialize toml")?;
            while buf.ends_with('\n') {
                buf.pop();
            }
            buf
        }
    };
    out.push('\n');
    Ok(out)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<WorkDirsError>() {
        Some(WorkDirsError::CurrentDir(_)) => exit_codes::UNRESOLVED,
        _ => exit_codes::FAILED,
    }
}
