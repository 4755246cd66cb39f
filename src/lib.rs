//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Region category rules and no-data reasons.
pub mod classify;
/// App configuration loading.
pub mod config;
/// State dataset records and store.
pub mod dataset;
/// Shared egui UI modules.
pub mod egui_app;
/// pt-BR number formatting helpers.
pub mod format;
/// GeoJSON feature parsing and the state name table.
pub mod geo;
/// Shared HTTP agent and bounded fetches.
pub mod http_client;
/// Dataset-to-geometry join.
pub mod join;
/// Logging setup.
pub mod logging;
