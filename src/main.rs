//! Tidymark - cleanup commands for markdown files.
//!
//! # Usage
//!
//! ```bash
//! tidymark notes.md strip-all-bold
//! tidymark notes.md next-bold --cursor 4:0 --json
//! tidymark notes.md delete-lines --select 2:0..5:3 --dry-run
//! cat notes.md | tidymark - trim-trailing
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use tidymark::commands::{Command, Outcome, OutcomeLevel, execute};
use tidymark::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use tidymark::editor::{EditorBuffer, Position, Selection, TextSurface};
use tidymark::perf;

/// Cleanup commands for markdown files
#[derive(Parser, Debug)]
#[command(name = "tidymark", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit, or `-` to read stdin and write stdout
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// next-bold, prev-bold, strip-bold, strip-all-bold, remove-dividers,
    /// delete-line, delete-lines or trim-trailing
    #[arg(value_name = "COMMAND")]
    command: Command,

    /// Caret position before the command, as zero-based LINE:COL
    #[arg(long, value_name = "LINE:COL", conflicts_with = "select")]
    cursor: Option<Position>,

    /// Selection before the command, as zero-based ANCHOR..HEAD (LINE:COL..LINE:COL)
    #[arg(long, value_name = "RANGE")]
    select: Option<Selection>,

    /// Print the result instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Print command timings to stderr
    #[arg(long)]
    perf: bool,

    /// Append command events to a log file
    #[arg(long, value_name = "PATH")]
    event_log: Option<PathBuf>,

    /// Save current flags as defaults in the global config
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the global config
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            dry_run: self.dry_run,
            json: self.json,
            quiet: self.quiet,
            perf: self.perf,
            event_log: self.event_log.clone(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    outcome: &'a Outcome,
    selection: Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_timings(effective.perf);
    let event_log_path = effective
        .event_log
        .clone()
        .or_else(|| std::env::var_os("TIDYMARK_EVENT_LOG").map(PathBuf::from));
    if let Some(path) = &event_log_path
        && let Err(err) = perf::open_event_log(path)
    {
        eprintln!("[warn] Failed to open event log {}: {err}", path.display());
    }

    let to_stdout = effective.dry_run || cli.file.as_os_str() == "-";
    let timer = perf::Timer::start("read");
    let source = read_source(&cli.file)?;
    timer.stop();
    let mut buffer = EditorBuffer::from_text(&source);
    if let Some(selection) = cli.select {
        buffer.set_selection(selection);
    } else if let Some(cursor) = cli.cursor {
        buffer.set_cursor(cursor);
    }

    let outcome = execute(Some(&mut buffer), cli.command);
    if let Err(err) = perf::close_event_log() {
        eprintln!("[warn] Failed to flush event log: {err}");
    }

    let mut stdout = std::io::stdout().lock();
    if effective.json {
        let report = Report {
            outcome: &outcome,
            selection: buffer.selection(),
            text: to_stdout.then(|| buffer.text()),
        };
        serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
        writeln!(stdout)?;
    } else {
        if !(effective.quiet && outcome.level == OutcomeLevel::Info) {
            eprintln!("{outcome}");
        }
        if to_stdout {
            write!(stdout, "{}", buffer.text())?;
        }
    }

    if buffer.is_dirty() && !to_stdout {
        let timer = perf::Timer::start("write");
        fs::write(&cli.file, buffer.text())
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
        buffer.mark_clean();
        timer.stop();
    }

    if outcome.level == OutcomeLevel::Error {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
