//! Saved command-line defaults.
//!
//! Config files hold flag tokens exactly as typed on the command line, one
//! or more per line, with `#` comments. A global file is overridden by a
//! local `.tidymarkrc`, which is overridden by the actual command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
    pub perf: bool,
    pub event_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            dry_run: self.dry_run || other.dry_run,
            json: self.json || other.json,
            quiet: self.quiet || other.quiet,
            perf: self.perf || other.perf,
            event_log: other
                .event_log
                .clone()
                .or_else(|| self.event_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("tidymark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("tidymark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("tidymark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("tidymark")
                .join("config");
        }
    }

    PathBuf::from(".tidymarkrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".tidymarkrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# tidymark defaults (saved with --save)".to_string());
    if flags.dry_run {
        lines.push("--dry-run".to_string());
    }
    if flags.json {
        lines.push("--json".to_string());
    }
    if flags.quiet {
        lines.push("--quiet".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.event_log {
        lines.push(format!("--event-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick out the flags that can be saved as defaults; everything else is
/// ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--dry-run" {
            flags.dry_run = true;
        } else if token == "--json" {
            flags.json = true;
        } else if token == "--quiet" || token == "-q" {
            flags.quiet = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if token == "--event-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.event_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--event-log=") {
            flags.event_log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
