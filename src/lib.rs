//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted application configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// HTTP client configuration shared by network calls.
pub mod http_client;
/// Display-string tables and language selection.
pub mod i18n;
/// Logging setup.
pub mod logging;
/// Report draft state, validation, and attachments.
pub mod report;
/// Report submission transport.
pub mod submit;
/// Bot-verification helpers.
pub mod verification;
