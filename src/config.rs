//! Service configuration
//!
//! Configuration is layered: a TOML file (path from `CONFIG_PATH`,
//! default `config.toml`, optional) overridden by `CAMPUS_*`
//! environment variables. Every field has a serde default so an
//! absent file yields a fully usable configuration.

use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub syllabus: SyllabusConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory containing the per-subject CSV files
    #[serde(default = "default_dataset_dir")]
    pub dir: String,

    /// File in the dataset directory that is excluded from matching
    #[serde(default = "default_excluded_file")]
    pub excluded_file: String,
}

/// Matcher tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum fuzzy score (0-100) for a record to be returned
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,

    /// Maximum number of ranked matches returned per query
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Minimum overlapping tokens for a partial word match
    #[serde(default = "default_min_overlap")]
    pub min_overlap: usize,

    /// Maximum accepted query length in bytes
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
}

/// Syllabus catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyllabusConfig {
    /// Optional JSON catalog file; the built-in catalog is used when absent
    #[serde(default)]
    pub catalog_path: Option<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Page rendering configuration (cosmetic only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Background image URL for the query page
    #[serde(default)]
    pub background_url: Option<String>,

    /// Background opacity in [0, 1]
    #[serde(default = "default_background_opacity")]
    pub background_opacity: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_dataset_dir() -> String {
    "data".to_string()
}

fn default_excluded_file() -> String {
    "University_Website_Data_Question_Answer.csv".to_string()
}

fn default_fuzzy_threshold() -> u8 {
    60
}

fn default_top_n() -> usize {
    3
}

fn default_min_overlap() -> usize {
    1
}

fn default_max_query_len() -> usize {
    512
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_title() -> String {
    "Campus Answers".to_string()
}

fn default_background_opacity() -> f32 {
    0.8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dir: default_dataset_dir(),
            excluded_file: default_excluded_file(),
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            top_n: default_top_n(),
            min_overlap: default_min_overlap(),
            max_query_len: default_max_query_len(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            background_url: None,
            background_opacity: default_background_opacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the given file (optional) plus environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values outside their documented ranges
    pub fn validate(&self) -> Result<()> {
        if self.matcher.fuzzy_threshold > 100 {
            return Err(LookupError::Config(format!(
                "fuzzy_threshold must be in [0, 100], got {}",
                self.matcher.fuzzy_threshold
            )));
        }

        if self.matcher.top_n == 0 {
            return Err(LookupError::Config("top_n must be at least 1".to_string()));
        }

        if self.matcher.min_overlap == 0 {
            return Err(LookupError::Config(
                "min_overlap must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.page.background_opacity) {
            return Err(LookupError::Config(format!(
                "background_opacity must be in [0, 1], got {}",
                self.page.background_opacity
            )));
        }

        Ok(())
    }

    /// Socket address string for the HTTP server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
