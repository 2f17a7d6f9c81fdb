use config::{Config as ConfigLoader, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input caps (in characters) for each pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Page text handed to the summarizer (head/tail windowed)
    pub summary_input_chars: usize,
    /// Summary handed to blog generation (head only)
    pub blog_summary_chars: usize,
    pub keywords_summary_chars: usize,
    pub social_summary_chars: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            summary_input_chars: 12_000,
            blog_summary_chars: 4_000,
            keywords_summary_chars: 3_000,
            social_summary_chars: 3_000,
        }
    }
}

/// Sampling temperature for each prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    pub summarize: f32,
    pub blog: f32,
    pub keywords: f32,
    pub social: f32,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            summarize: 0.1,
            blog: 0.3,
            keywords: 0.2,
            social: 0.3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub windows: WindowConfig,
    pub temperatures: TemperatureConfig,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_windows(mut self, windows: WindowConfig) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_temperatures(mut self, temperatures: TemperatureConfig) -> Self {
        self.temperatures = temperatures;
        self
    }

    /// Load configuration over the built-in defaults
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. built-in defaults
    /// 2. config/breeze.toml (optional)
    /// 3. Environment variables, e.g. `BREEZE_WINDOWS__BLOG_SUMMARY_CHARS=2000`
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()
            .add_source(File::with_name("config/breeze").required(false))
            .add_source(
                Environment::with_prefix("BREEZE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load config from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Parse TOML text over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        ConfigLoader::builder()
    }
}
