use crate::config::{
    Settings, DEFAULT_API_BASE_URL, DEFAULT_DATA_DIR, DEFAULT_MODELS_DIR, DEFAULT_TIMEOUT_SECONDS,
};
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: Option<ServiceConfig>,
    pub artifacts: Option<ArtifactsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    pub models_dir: Option<String>,
    pub data_dir: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(DashboardError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DashboardError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }

    /// 缺的欄位補預設值
    pub fn into_settings(self) -> Settings {
        let service = self.service.unwrap_or_default();
        let artifacts = self.artifacts.unwrap_or_default();

        Settings {
            api_base_url: service
                .base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            models_dir: artifacts
                .models_dir
                .unwrap_or_else(|| DEFAULT_MODELS_DIR.to_string()),
            data_dir: artifacts
                .data_dir
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            timeout_seconds: service.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
