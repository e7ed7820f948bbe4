//! Startup configuration: CLI flags over environment variables over
//! built-in defaults, resolved once into an [`AppConfig`].

use crate::types::errors::{AppError, AppResult};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MANIFEST_FILE: &str = "FavouriteAnims.xml";
pub const DEFAULT_STAGING_DIR: &str = "put your packed anims here";
pub const DEFAULT_ASSETS_DIR: &str = "anims";
pub const DEFAULT_ASSET_EXT: &str = "ycd";
pub const DEFAULT_SETTLE_MS: u64 = 200;

pub const ENV_UNRAR_TOOL: &str = "FAVANIMS_UNRAR_TOOL";
pub const ENV_SETTLE_MS: &str = "FAVANIMS_SETTLE_MS";

#[derive(Debug, Parser)]
#[command(
    name = "favanims",
    version,
    about = "Unpack staged animation archives, collect <Anim dict=\"…\"> references, and merge them into a favourites manifest"
)]
pub struct Cli {
    /// Directory the packed archives are dropped into.
    #[arg(long)]
    pub staging_dir: Option<PathBuf>,

    /// Manifest file name, looked up in the working directory and next to
    /// the executable.
    #[arg(long)]
    pub manifest: Option<String>,

    /// Destination folder for relocated animation containers.
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// File extension of the animation containers to relocate.
    #[arg(long)]
    pub asset_ext: Option<String>,

    /// External unrar executable to use instead of the built-in library.
    #[arg(long)]
    pub unrar_tool: Option<PathBuf>,

    /// Delay in milliseconds after each successful extraction.
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Answer yes to all confirmation prompts.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Print the final summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Fully resolved run configuration. Paths are absolute or rooted at the
/// working directory; nothing below reads the environment again.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    pub manifest_name: String,
    pub staging_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub asset_ext: String,
    pub settle: Duration,
    pub unrar_tool: Option<PathBuf>,
    pub assume_yes: bool,
    pub json: bool,
}

impl AppConfig {
    pub fn resolve(cli: &Cli, root: PathBuf) -> AppResult<Self> {
        let manifest_name = cli
            .manifest
            .clone()
            .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string());
        let staging_dir = resolve_dir(&root, cli.staging_dir.as_deref(), DEFAULT_STAGING_DIR);
        let assets_dir = resolve_dir(&root, cli.assets_dir.as_deref(), DEFAULT_ASSETS_DIR);
        let asset_ext = cli
            .asset_ext
            .clone()
            .unwrap_or_else(|| DEFAULT_ASSET_EXT.to_string())
            .trim_start_matches('.')
            .to_string();

        let unrar_tool = cli
            .unrar_tool
            .clone()
            .or_else(|| std::env::var_os(ENV_UNRAR_TOOL).map(PathBuf::from));

        let settle_ms = match cli.settle_ms {
            Some(ms) => ms,
            None => match std::env::var(ENV_SETTLE_MS) {
                Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("invalid {ENV_SETTLE_MS} value: {raw:?}"))
                })?,
                Err(std::env::VarError::NotPresent) => DEFAULT_SETTLE_MS,
                Err(e) => return Err(AppError::Config(format!("invalid {ENV_SETTLE_MS}: {e}"))),
            },
        };

        Ok(Self {
            root,
            manifest_name,
            staging_dir,
            assets_dir,
            asset_ext,
            settle: Duration::from_millis(settle_ms),
            unrar_tool,
            assume_yes: cli.yes,
            json: cli.json,
        })
    }
}

fn resolve_dir(root: &Path, flag: Option<&Path>, default_name: &str) -> PathBuf {
    match flag {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => root.join(p),
        None => root.join(default_name),
    }
}
