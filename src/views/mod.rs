pub mod app;
pub mod home;
pub mod navbar;
pub mod paywall_modal;
pub mod report_view;
pub mod score_chart;

pub use app::App;
