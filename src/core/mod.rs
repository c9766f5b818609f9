pub mod artifacts;
pub mod dashboard;
pub mod diagnostics;
pub mod encoding;
pub mod predictor;

pub use crate::domain::model::{
    DataTable, ModelKind, NumericColumn, PredictionForm, PredictionOutcome, PredictionRequest,
    PredictionResponse,
};
pub use crate::domain::ports::{ConfigProvider, Predictor, Storage};
pub use crate::utils::error::Result;
