//! Application setup: logging and wiring of the long-lived services.

use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::controller::AppController;
use crate::paywall::SimulatedCheckout;
use crate::report::{ExportHandle, HtmlDocumentExporter};
use crate::service::{AnalysisGateway, GeminiGateway};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, UsageStore};

/// Initialize logging with tracing_subscriber.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,seo_master=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .init();
}

/// Opens the persistent store, falling back to memory so the app still runs
/// (without persistence) when the data directory is unusable.
pub fn open_storage(config: &Config) -> Arc<dyn KeyValueStore> {
    let opened = config
        .storage_path
        .as_ref()
        .context("no data directory available")
        .and_then(|path| {
            FileStore::open(path)
                .with_context(|| format!("failed to open storage at {}", path.display()))
        });
    match opened {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Usage will not persist across restarts: {:#}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

/// Builds the analysis gateway. A client build failure leaves the app usable
/// with a gateway that reports the failure on every request.
pub fn build_gateway(config: &Config) -> Arc<dyn AnalysisGateway> {
    match GeminiGateway::new(config.gemini.clone()) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            tracing::error!("Failed to build Gemini client: {}", e);
            Arc::new(UnavailableGateway(e.to_string()))
        }
    }
}

pub fn build_controller(config: &Config) -> AppController {
    AppController::new(
        build_gateway(config),
        UsageStore::new(open_storage(config)),
        SimulatedCheckout::default(),
    )
}

pub fn build_exporter(config: &Config) -> ExportHandle {
    ExportHandle::new(HtmlDocumentExporter::new(config.export_dir.clone()))
}

struct UnavailableGateway(String);

#[async_trait::async_trait]
impl AnalysisGateway for UnavailableGateway {
    async fn analyze(
        &self,
        _request: &crate::domain::AnalysisRequest,
    ) -> Result<crate::domain::SeoReport, crate::error::GatewayError> {
        Err(crate::error::GatewayError::Network(self.0.clone()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UsageState;
    use std::path::PathBuf;

    fn config_with_storage(storage_path: Option<PathBuf>, export_dir: PathBuf) -> Config {
        let mut config = Config::from_lookup(|_| None);
        config.storage_path = storage_path;
        config.export_dir = export_dir;
        config
    }

    #[test]
    fn controller_picks_up_persisted_usage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStore::open(&path)
            .unwrap()
            .set(crate::storage::USAGE_KEY, "-100")
            .unwrap();

        let config = config_with_storage(Some(path), dir.path().to_path_buf());
        let controller = build_controller(&config);
        assert_eq!(controller.usage(), UsageState::Pro);
    }

    #[test]
    fn storage_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_storage(None, dir.path().to_path_buf());
        let store = open_storage(&config);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
