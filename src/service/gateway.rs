use async_trait::async_trait;

use crate::domain::{AnalysisRequest, SeoReport};
use crate::error::GatewayError;

/// External audit producer.
///
/// One call per request, no partial results: either a full report or an
/// error carrying a display message.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<SeoReport, GatewayError>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}
