use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::models::{CURRENCY_GLYPH, FILLER_ASSET, PENDING_PLACEHOLDER};
use crate::parsers::{BadgeTables, FieldResolver};

/// Base name of the optional config file (`taproom.toml`, `taproom.json`, ...)
pub const CONFIG_FILE: &str = "taproom";
/// Environment prefix: `TAPROOM_RUN_ONCE`, `TAPROOM_SNAPSHOT__ENABLED`, ...
pub const ENV_PREFIX: &str = "TAPROOM";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub board: BoardConfig,
    pub fields: FieldResolver,
    pub badges: BadgeTables,
    pub output: OutputConfig,
    pub snapshot: SnapshotConfig,
    pub refresh_interval_seconds: u64,
    pub run_once: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Published CSV export of the menu sheet
    pub url: String,
    /// Query parameter carrying the cache-busting timestamp
    pub cache_bust_param: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub items_per_page: usize,
    /// 1-based slot of the filler card in the ordered sequence; `None` disables it
    pub filler_position: Option<usize>,
    pub filler_asset: String,
    /// Number of screens rendered each refresh
    pub page_count: usize,
    pub currency_glyph: String,
    /// Shown instead of a price for pending items
    pub pending_placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Page documents are written as `<prefix><N>.html`
    pub page_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub enabled: bool,
    pub browser: String,
    pub width: u32,
    pub height: u32,
    pub navigation_timeout_seconds: u64,
    /// Extra wait after load so the board data has landed in the page
    pub settle_delay_ms: u64,
    /// Public address the pages are served from; rendered files are used when unset
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            board: BoardConfig::default(),
            fields: FieldResolver::default(),
            badges: BadgeTables::default(),
            output: OutputConfig::default(),
            snapshot: SnapshotConfig::default(),
            refresh_interval_seconds: 60,
            run_once: false,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vRcUeH0R2aQgSWh0hhjkHEF2j3vSmWaFn-vpEvdl3wmgZavajJXslZR7zB8a8Wk3r2cKkXolnIXrq14/pub?gid=0&single=true&output=csv".to_string(),
            cache_bust_param: "_ts".to_string(),
            timeout_seconds: 25,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            items_per_page: 15,
            filler_position: Some(40),
            filler_asset: FILLER_ASSET.to_string(),
            page_count: 3,
            currency_glyph: CURRENCY_GLYPH.to_string(),
            pending_placeholder: PENDING_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            page_prefix: "screen".to_string(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            browser: "chromium".to_string(),
            width: 3840,
            height: 2160,
            navigation_timeout_seconds: 120,
            settle_delay_ms: 4000,
            base_url: None,
        }
    }
}

impl SnapshotConfig {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_seconds)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Built-in defaults, overlaid by `taproom.*` in the working directory, then by `TAPROOM_*` env vars
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    /// Parse a config from TOML text on top of the defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        if self.refresh_interval_seconds == 0 {
            self.refresh_interval_seconds = 60;
        }
        if self.board.items_per_page == 0 {
            self.board.items_per_page = BoardConfig::default().items_per_page;
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }
}
