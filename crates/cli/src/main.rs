use std::ffi::OsString;
use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use sidedrawer_tui::{DEFAULT_NAV_ITEMS, TuiConfig};

/// Environment variable used to override the log file path.
const LOG_PATH_ENV: &str = "SIDEDRAWER_LOG_PATH";

/// Host page with a side drawer offering Navigation and Contact tabs.
#[derive(Parser, Debug)]
#[command(name = "sidedrawer", version, about)]
struct Args {
    /// Drawer title; left unset when omitted
    #[arg(long)]
    title: Option<String>,

    /// Start with the drawer open
    #[arg(long)]
    open: bool,

    /// Entry shown in the Navigation tab (repeatable)
    #[arg(long = "nav-item", value_name = "TEXT")]
    nav_items: Vec<String>,

    /// Preferred theme id (TUI_THEME takes precedence)
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Log file destination
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> TuiConfig {
        let nav_items = if self.nav_items.is_empty() {
            DEFAULT_NAV_ITEMS.iter().map(|item| item.to_string()).collect()
        } else {
            self.nav_items
        };
        TuiConfig {
            title: self.title,
            open: self.open,
            nav_items,
            theme: self.theme,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();
    let log_path = resolve_log_path(args.log_file.take(), std::env::var_os(LOG_PATH_ENV));
    init_tracing(&log_path)?;
    tracing::info!(log_path = %log_path.display(), "starting side drawer");

    let attributes = sidedrawer_tui::run(args.into_config()).await?;
    println!("{}", serde_json::to_string(&attributes)?);
    Ok(())
}

/// Logs go to a file so they never interleave with the alternate screen.
fn init_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Flag first, then the environment, then the user cache directory.
fn resolve_log_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(path) = env_value
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let base_directory = dirs_next::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base_directory.join("sidedrawer").join("sidedrawer.log")
}
