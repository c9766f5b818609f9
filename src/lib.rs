pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalArtifactStore, CliConfig, Settings};
pub use core::{artifacts::ArtifactBundle, dashboard::DashboardEngine, predictor::HttpPredictor};
pub use domain::model::{
    ModelKind, PredictionForm, PredictionOutcome, PredictionRequest, PredictionResponse,
};
pub use utils::error::{DashboardError, Result};
