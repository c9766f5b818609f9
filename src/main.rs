use clap::Parser;
use resto_cluster::config::{PredictArgs, Section, Settings};
use resto_cluster::core::dashboard;
use resto_cluster::utils::logger;
use resto_cluster::{
    ArtifactBundle, CliConfig, DashboardEngine, HttpPredictor, LocalArtifactStore, ModelKind,
    Result,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting resto-cluster dashboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 解析並驗證設定
    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run(&settings, &config.section).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                resto_cluster::utils::error::ErrorSeverity::Low => 0,
                resto_cluster::utils::error::ErrorSeverity::Medium => 2,
                resto_cluster::utils::error::ErrorSeverity::High => 1,
                resto_cluster::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(settings: &Settings, section: &Section) -> Result<String> {
    match section {
        Section::Home => {
            let models = LocalArtifactStore::new(settings.models_dir.clone());
            let data = LocalArtifactStore::new(settings.data_dir.clone());
            Ok(dashboard::render_home(&models, &data).await)
        }
        Section::Kmeans(args) => predict(settings, ModelKind::KMeans, args).await,
        Section::Dbscan(args) => predict(settings, ModelKind::Dbscan, args).await,
        Section::Categories => Ok(dashboard::render_categories()),
    }
}

async fn predict(settings: &Settings, model: ModelKind, args: &PredictArgs) -> Result<String> {
    // 先載入模型包，缺檔就不進入互動流程
    let store = LocalArtifactStore::new(settings.models_dir.clone());
    let artifacts = ArtifactBundle::load(&store).await?;

    let predictor = HttpPredictor::new(settings)?;
    let engine = DashboardEngine::new(artifacts, predictor);

    engine.predict(model, &args.form()).await
}
