pub mod gateway;
pub mod gemini;
pub mod prompt;

pub use gateway::AnalysisGateway;
pub use gemini::GeminiGateway;
