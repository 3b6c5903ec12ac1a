//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the model artifact location, only edit this file.

/// Default path of the pre-trained syngas yield model (ONNX)
///
/// This is the fallback path when no environment variable is set.
/// The artifact is produced by the offline training pipeline and is
/// read-only as far as this application is concerned.
pub const DEFAULT_MODEL_PATH: &str = "models/wte_syngas.onnx";

/// Suffix of the checksum sidecar written next to the artifact
pub const CHECKSUM_SIDECAR_SUFFIX: &str = ".sha256";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "WTE Plant Simulator";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the model artifact path from environment or use default
pub fn model_path() -> String {
    std::env::var("WTE_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Path of the checksum sidecar for the configured artifact
pub fn checksum_path() -> String {
    format!("{}{}", model_path(), CHECKSUM_SIDECAR_SUFFIX)
}
