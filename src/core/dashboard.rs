use crate::core::artifacts::{self, ArtifactBundle};
use crate::core::{diagnostics, encoding};
use crate::domain::model::{ModelKind, PredictionForm};
use crate::domain::ports::{Predictor, Storage};
use crate::utils::error::Result;

/// Drives one user interaction: form in, display line out. Constructing the
/// engine requires the fully loaded artifact bundle, so no prediction can be
/// attempted with partially loaded state.
#[derive(Debug)]
pub struct DashboardEngine<P: Predictor> {
    artifacts: ArtifactBundle,
    predictor: P,
}

impl<P: Predictor> DashboardEngine<P> {
    pub fn new(artifacts: ArtifactBundle, predictor: P) -> Self {
        Self {
            artifacts,
            predictor,
        }
    }

    pub fn artifacts(&self) -> &ArtifactBundle {
        &self.artifacts
    }

    /// 一次送出：編碼、呼叫服務、組出顯示文字
    pub async fn predict(&self, model: ModelKind, form: &PredictionForm) -> Result<String> {
        let request = form.encode()?;
        tracing::info!(
            "Submitting {} prediction (Score={}, Price_Range_encoded={}, Category_encoded={})",
            model.display_name(),
            request.score,
            request.price_range_encoded,
            request.category_encoded
        );

        let outcome = self.predictor.predict(model, &request).await?;
        Ok(outcome.display(model))
    }
}

/// Home section: welcome text plus the three diagnostics. Each diagnostic
/// loads its own artifact; a missing file blanks that section only.
pub async fn render_home<M: Storage, D: Storage>(models: &M, data: &D) -> String {
    let mut out = String::new();
    out.push_str("Restaurant Clustering Prediction\n");
    out.push_str("================================\n\n");
    out.push_str("Welcome to the Restaurant Clustering Prediction App.\n");
    out.push_str("Predict restaurant clusters with the `kmeans` and `dbscan` commands;\n");
    out.push_str("the sections below show the diagnostics from the training phase.\n\n");
    out.push_str("Training Phase Visualizations\n");
    out.push_str("-----------------------------\n\n");

    match artifacts::load_wcss(models).await {
        Ok(wcss) => out.push_str(&diagnostics::render_elbow(&wcss)),
        Err(e) => {
            tracing::warn!("Elbow section skipped: {}", e);
            out.push_str("Elbow Method for KMeans\n");
            out.push_str(&format!("  (!) {}\n", e.user_friendly_message()));
        }
    }
    out.push('\n');

    match artifacts::load_k_distance(models).await {
        Ok(k_dist) => out.push_str(&diagnostics::render_k_distance(&k_dist)),
        Err(e) => {
            tracing::warn!("K-distance section skipped: {}", e);
            out.push_str("K-Distance Graph\n");
            out.push_str(&format!("  (!) {}\n", e.user_friendly_message()));
        }
    }
    out.push('\n');

    match artifacts::load_cleaned_data(data).await {
        Ok(table) => out.push_str(&diagnostics::render_correlation(&table)),
        Err(e) => {
            tracing::warn!("Correlation section skipped: {}", e);
            out.push_str("Correlation Matrix\n");
            out.push_str(&format!("  (!) {}\n", e.user_friendly_message()));
        }
    }

    out
}

/// The CLI rendition of the form dropdowns.
pub fn render_categories() -> String {
    let symbols: Vec<&str> = encoding::price_range_symbols().collect();
    let mut out = format!("Price ranges: {}\n\nCategories:\n", symbols.join(", "));
    for name in encoding::category_names() {
        out.push_str(&format!("  {}\n", name));
    }
    out
}
