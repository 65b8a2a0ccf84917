pub mod models;
pub mod usage;

pub use models::{
    AnalysisRequest, AppState, Category, PlanTier, SeoMetrics, SeoReport, Severity, Suggestion,
    TechnicalDetails,
};
pub use usage::{UsageState, FREE_LIMIT, PRO_SENTINEL};
