use crate::domain::model::{ModelKind, PredictionOutcome, PredictionRequest, PredictionResponse};
use crate::domain::ports::{ConfigProvider, Predictor};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// JSON-over-HTTPS client for the remote prediction service.
#[derive(Debug)]
pub struct HttpPredictor {
    client: Client,
    base_url: String,
}

impl HttpPredictor {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        // 明確設定逾時，不依賴傳輸層預設值
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: ModelKind) -> String {
        format!("{}/predict/{}", self.base_url, model.path_suffix())
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(
        &self,
        model: ModelKind,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome> {
        let endpoint = self.endpoint(model);
        tracing::debug!("📡 POST {}", endpoint);

        let response = self.client.post(&endpoint).json(request).send().await?;
        let status = response.status();
        tracing::debug!("Prediction response status: {}", status);

        if !status.is_success() {
            return Err(DashboardError::ServiceError {
                status: status.as_u16(),
                endpoint,
            });
        }

        let parsed: PredictionResponse = response.json().await?;
        Ok(match parsed.cluster {
            Some(id) => PredictionOutcome::Assigned(id),
            None => PredictionOutcome::Unassigned,
        })
    }
}
