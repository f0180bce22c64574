//! Command-line and environment configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mzalendo_lens_sdk::CardinalityPolicy;

use crate::upload::MAX_UPLOAD_BYTES;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Older key variable, still honoured as a fallback
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Mzalendo Lens CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mzalendo-lens",
    version,
    about = "Decode a bill, see what it costs you, then prove you got it"
)]
pub struct Args {
    /// Gemini API key (falls back to API_KEY)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for analysis
    #[arg(long, env = "MZALENDO_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(long, env = "MZALENDO_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// strict: reject analyses without exactly 3 cards and 3 questions; lenient: accept any count
    #[arg(long, default_value_t = CardinalityPolicy::Strict)]
    pub cardinality: CardinalityPolicy,

    /// Delay before a quiz explanation is revealed, in milliseconds
    #[arg(long, default_value_t = 350)]
    pub reveal_delay_ms: u64,

    /// Prefill the intake screen with bill text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Attach a PDF, JPG or PNG on startup
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Extra .env file to load before reading the environment
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Log file path (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "mzalendo_lens=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Resolved configuration used by the application
#[derive(Debug, Clone)]
pub struct LensConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
    pub cardinality: CardinalityPolicy,
    pub reveal_delay: Duration,
    pub max_upload_bytes: u64,
    pub initial_text: Option<String>,
    pub initial_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl LensConfig {
    /// Load `.env`, parse the command line, and resolve defaults.
    ///
    /// When `--env-file` is given the arguments are parsed a second time so
    /// values from that file are visible to clap's `env` fallbacks.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut args = Args::parse();
        if let Some(env_file) = args.env_file.clone() {
            load_env_file(&env_file)?;
            args = Args::parse();
        }

        let legacy_key = std::env::var(LEGACY_API_KEY_VAR).ok();
        Ok(Self::from_args(args, legacy_key))
    }

    pub fn from_args(args: Args, legacy_key: Option<String>) -> Self {
        Self {
            api_key: resolve_api_key(args.api_key, legacy_key),
            model: args.model,
            api_base: args.api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
            cardinality: args.cardinality,
            reveal_delay: Duration::from_millis(args.reveal_delay_ms),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            initial_text: args.text,
            initial_file: args.file,
            log_file: args.log_file.unwrap_or_else(default_log_path),
            log_level: args.log_level,
        }
    }
}

fn load_env_file(path: &Path) -> Result<()> {
    dotenv::from_path(path)
        .with_context(|| format!("Failed to load env file {}", path.display()))?;
    Ok(())
}

/// First non-blank key wins
pub fn resolve_api_key(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary
        .into_iter()
        .chain(legacy)
        .map(|k| k.trim().to_string())
        .find(|k| !k.is_empty())
}

/// Get the default path of the log file
pub fn default_log_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "mzalendo-lens", "mzalendo-lens") {
        proj_dirs.data_dir().join("mzalendo-lens.log")
    } else {
        PathBuf::from(".mzalendo-lens.log")
    }
}
