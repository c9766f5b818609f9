pub mod cli;
pub mod toml_config;

use crate::core::encoding;
use crate::domain::model::PredictionForm;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

pub use toml_config::TomlConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://project-5-itbj.onrender.com";
pub const DEFAULT_MODELS_DIR: &str = "models";
pub const DEFAULT_DATA_DIR: &str = "Data";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "resto-cluster")]
#[command(about = "Restaurant clustering prediction dashboard")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    pub models_dir: String,

    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Read service and artifact settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub section: Section,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Section {
    /// Welcome page with the training-phase diagnostics
    Home,
    /// Predict a cluster with the KMeans model
    Kmeans(PredictArgs),
    /// Predict a cluster with the DBSCAN model
    Dbscan(PredictArgs),
    /// List the selectable categories and price ranges
    Categories,
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// Restaurant score in 0..=10
    #[arg(long, default_value_t = 9.0)]
    pub score: f64,

    /// Price range symbol: $, $$ or $$$
    #[arg(long, default_value = "$")]
    pub price_range: String,

    /// Restaurant category (see the `categories` command)
    #[arg(long, default_value = encoding::default_category())]
    pub category: String,
}

impl PredictArgs {
    pub fn form(&self) -> PredictionForm {
        PredictionForm {
            score: self.score,
            price_range: self.price_range.clone(),
            category: self.category.clone(),
        }
    }
}

/// Resolved process-wide settings, the one immutable object the rest of the
/// application reads connection and artifact locations from.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub models_dir: String,
    pub data_dir: String,
    pub timeout_seconds: u64,
}

impl Settings {
    /// 指定 --config 時整組設定取自 TOML 檔，否則取 CLI 旗標
    pub fn resolve(config: &CliConfig) -> Result<Settings> {
        let settings = match &config.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => Settings {
                api_base_url: config.api_base_url.clone(),
                models_dir: config.models_dir.clone(),
                data_dir: config.data_dir.clone(),
                timeout_seconds: config.timeout_seconds,
            },
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn models_dir(&self) -> &str {
        &self.models_dir
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_path("models_dir", &self.models_dir)?;
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
