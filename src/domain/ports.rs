use crate::domain::model::{ModelKind, PredictionOutcome, PredictionRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn models_dir(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(
        &self,
        model: ModelKind,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome>;
}
