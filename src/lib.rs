pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod io;
pub mod lifecycle;
pub mod paywall;
pub mod report;
pub mod service;
pub mod storage;
pub mod test_utils;
pub mod views;
