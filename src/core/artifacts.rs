use crate::domain::model::{DataTable, NumericColumn};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const KMEANS_MODEL_FILE: &str = "kmeans_model.pkl";
pub const DBSCAN_MODEL_FILE: &str = "dbscan_model.pkl";
pub const SCALER_FILE: &str = "scaler.pkl";
pub const WCSS_FILE: &str = "wcss.json";
pub const K_DIST_FILE: &str = "k_dist_sorted.json";
pub const CLEANED_DATA_FILE: &str = "Cleand_data.csv";

/// The trained models and the feature scaler, loaded once as opaque blobs.
/// Inference runs behind the remote service; these gate startup of the
/// prediction modes and are never deserialized or mutated.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub kmeans_model: Vec<u8>,
    pub dbscan_model: Vec<u8>,
    pub scaler: Vec<u8>,
}

impl ArtifactBundle {
    /// 載入模型與 scaler，任一缺檔即失敗
    pub async fn load<S: Storage>(store: &S) -> Result<Self> {
        let kmeans_model = store.read_file(KMEANS_MODEL_FILE).await?;
        let dbscan_model = store.read_file(DBSCAN_MODEL_FILE).await?;
        let scaler = store.read_file(SCALER_FILE).await?;

        tracing::debug!(
            "Loaded model bundle: kmeans={}B, dbscan={}B, scaler={}B",
            kmeans_model.len(),
            dbscan_model.len(),
            scaler.len()
        );

        Ok(Self {
            kmeans_model,
            dbscan_model,
            scaler,
        })
    }
}

/// WCSS per cluster count (k = 1..), for the elbow diagnostic.
pub async fn load_wcss<S: Storage>(store: &S) -> Result<Vec<f64>> {
    let raw = store.read_file(WCSS_FILE).await?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Sorted k-th nearest-neighbour distances, for the eps diagnostic.
pub async fn load_k_distance<S: Storage>(store: &S) -> Result<Vec<f64>> {
    let raw = store.read_file(K_DIST_FILE).await?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Cleaned training table, reduced to the columns that parse as numeric.
pub async fn load_cleaned_data<S: Storage>(store: &S) -> Result<DataTable> {
    let raw = store.read_file(CLEANED_DATA_FILE).await?;
    parse_numeric_columns(&raw)
}

fn parse_numeric_columns(raw: &[u8]) -> Result<DataTable> {
    let mut reader = csv::Reader::from_reader(raw);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            if i < cells.len() {
                cells[i].push(field.trim().to_string());
            }
        }
    }

    // 只保留整欄都能解析成數值的欄位
    let mut columns = Vec::new();
    for (name, raw_column) in headers.into_iter().zip(cells) {
        if raw_column.is_empty() {
            continue;
        }
        let parsed: Option<Vec<f64>> = raw_column.iter().map(|c| c.parse::<f64>().ok()).collect();
        if let Some(values) = parsed {
            columns.push(NumericColumn { name, values });
        }
    }

    Ok(DataTable { columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DashboardError;
    use std::collections::HashMap;

    struct MemoryStore {
        files: HashMap<String, Vec<u8>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
            }
        }

        fn with_file(mut self, path: &str, data: &[u8]) -> Self {
            self.files.insert(path.to_string(), data.to_vec());
            self
        }
    }

    impl Storage for MemoryStore {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| DashboardError::MissingArtifact {
                    path: path.to_string(),
                })
        }
    }

    fn full_bundle_store() -> MemoryStore {
        MemoryStore::new()
            .with_file(KMEANS_MODEL_FILE, b"kmeans-blob")
            .with_file(DBSCAN_MODEL_FILE, b"dbscan-blob")
            .with_file(SCALER_FILE, b"scaler-blob")
    }

    #[tokio::test]
    async fn test_bundle_loads_all_three_blobs() {
        let store = full_bundle_store();
        let bundle = ArtifactBundle::load(&store).await.unwrap();
        assert_eq!(bundle.kmeans_model, b"kmeans-blob");
        assert_eq!(bundle.dbscan_model, b"dbscan-blob");
        assert_eq!(bundle.scaler, b"scaler-blob");
    }

    #[tokio::test]
    async fn test_bundle_fails_when_scaler_is_missing() {
        let store = MemoryStore::new()
            .with_file(KMEANS_MODEL_FILE, b"kmeans-blob")
            .with_file(DBSCAN_MODEL_FILE, b"dbscan-blob");

        let err = ArtifactBundle::load(&store).await.unwrap_err();
        match err {
            DashboardError::MissingArtifact { path } => assert_eq!(path, SCALER_FILE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_wcss_parses_json_sequence() {
        let store = MemoryStore::new().with_file(WCSS_FILE, b"[100.5, 60.25, 40.0]");
        let wcss = load_wcss(&store).await.unwrap();
        assert_eq!(wcss, vec![100.5, 60.25, 40.0]);
    }

    #[tokio::test]
    async fn test_load_wcss_rejects_malformed_json() {
        let store = MemoryStore::new().with_file(WCSS_FILE, b"not json");
        assert!(matches!(
            load_wcss(&store).await,
            Err(DashboardError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_cleaned_data_keeps_only_numeric_columns() {
        let csv = b"Name,Score,Price_Range_encoded\nJoe's,9.1,0\nJane's,8.0,2\n";
        let store = MemoryStore::new().with_file(CLEANED_DATA_FILE, csv);

        let table = load_cleaned_data(&store).await.unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Score", "Price_Range_encoded"]);
        assert_eq!(table.columns[0].values, vec![9.1, 8.0]);
        assert_eq!(table.columns[1].values, vec![0.0, 2.0]);
    }

    #[tokio::test]
    async fn test_cleaned_data_missing_file_is_isolated_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            load_cleaned_data(&store).await,
            Err(DashboardError::MissingArtifact { .. })
        ));
    }
}
