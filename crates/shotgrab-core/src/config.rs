use crate::fetch::DEFAULT_USER_AGENT;
use crate::url_model::DEFAULT_ALLOWED_DOMAIN;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Transport settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Follow 3xx redirects (up to 10).
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Connect timeout in seconds; unset = libcurl default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds; unset = no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

/// Global configuration loaded from `~/.config/shotgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotgrabConfig {
    /// `User-Agent` sent with page requests.
    pub user_agent: String,
    /// Substring a page host must contain to be fetched.
    pub allowed_domain: String,
    /// Default base directory for dated output folders (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ShotgrabConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allowed_domain: DEFAULT_ALLOWED_DOMAIN.to_string(),
            output_dir: None,
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shotgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShotgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShotgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ShotgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
