//! Inference Engine - ONNX Runtime Integration
//!
//! Load and run the pre-trained syngas yield regressor. The artifact is
//! loaded at most once per process; the session handle is shared by every
//! caller afterwards and never reloaded.

use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use once_cell::sync::OnceCell;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// STATE
// ============================================================================

/// Latency stats
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static INFERENCE_COUNT: AtomicU64 = AtomicU64::new(0);

/// ONNX Session (loaded model). `ort` needs `&mut` to run, hence the lock.
static ONNX_SESSION: RwLock<Option<Session>> = RwLock::new(None);

/// Model metadata
static MODEL_METADATA: RwLock<Option<ModelMetadata>> = RwLock::new(None);

/// One-time load outcome. Every caller observes the same result; there is no
/// retry after a failed load.
static LOAD_RESULT: OnceCell<Result<(), ModelError>> = OnceCell::new();

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: String,
    pub features: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone)]
pub struct ModelError(pub String);

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelError: {}", self.0)
    }
}

impl std::error::Error for ModelError {}

// ============================================================================
// MODEL LOADING
// ============================================================================

/// Load the artifact once and cache the outcome for the process lifetime.
///
/// Called from `main` to fail fast on a missing/corrupt artifact, and again
/// (cheaply) before every prediction.
pub fn ensure_loaded() -> Result<(), ModelError> {
    LOAD_RESULT
        .get_or_init(|| load_from_file(&constants::model_path()))
        .clone()
}

/// Load an ONNX model from file into the shared session slot.
pub fn load_from_file(model_path: &str) -> Result<(), ModelError> {
    log::info!("Loading syngas yield model from: {}", model_path);

    if !std::path::Path::new(model_path).exists() {
        return Err(ModelError(format!("Model not found: {}", model_path)));
    }

    let session = Session::builder()
        .map_err(|e| ModelError(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| ModelError(format!("Failed to set optimization: {}", e)))?
        .commit_from_file(model_path)
        .map_err(|e| ModelError(format!("Failed to load model: {}", e)))?;

    log::info!("Syngas yield model loaded successfully");

    *ONNX_SESSION.write() = Some(session);

    let metadata = ModelMetadata {
        model_path: model_path.to_string(),
        model_type: "regression".to_string(),
        features: FEATURE_COUNT,
        loaded_at: chrono::Utc::now(),
    };
    *MODEL_METADATA.write() = Some(metadata);

    Ok(())
}

/// Check if model is loaded
pub fn is_model_loaded() -> bool {
    ONNX_SESSION.read().is_some()
}

/// Get model metadata
pub fn get_metadata() -> Option<ModelMetadata> {
    MODEL_METADATA.read().clone()
}

// ============================================================================
// STATUS
// ============================================================================

pub fn get_status() -> EngineStatus {
    let metadata = MODEL_METADATA.read();
    let (loaded, name) = if let Some(meta) = metadata.as_ref() {
        (true, meta.model_path.clone())
    } else {
        (false, "None".to_string())
    };

    let sum = LATENCY_SUM.load(Ordering::Relaxed);
    let count = INFERENCE_COUNT.load(Ordering::Relaxed);
    let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

    EngineStatus {
        model_loaded: loaded,
        model_name: name,
        inference_device: "ONNX Runtime (CPU)".to_string(),
        avg_latency_ms: avg,
        inference_count: count,
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Run the regressor on one feature vector, returning the predicted syngas
/// yield in kWh/ton.
pub fn predict(features: &FeatureVector) -> Result<f32, ModelError> {
    let start_time = std::time::Instant::now();

    let mut session_guard = ONNX_SESSION.write();
    let session = session_guard
        .as_mut()
        .ok_or_else(|| ModelError("Model not loaded".to_string()))?;

    let input_array = Array2::<f32>::from_shape_vec(
        (1, FEATURE_COUNT),
        features.as_slice().to_vec(),
    )
    .map_err(|e| ModelError(format!("Array error: {}", e)))?;

    let output_name = session
        .outputs()
        .first()
        .map(|o| o.name().to_string())
        .ok_or_else(|| ModelError("No output defined".to_string()))?;

    let input_tensor = Value::from_array(input_array)
        .map_err(|e| ModelError(format!("Tensor error: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| ModelError(format!("Inference failed: {}", e)))?;

    let output = outputs
        .get(&output_name)
        .ok_or_else(|| ModelError("No output".to_string()))?;

    let output_tensor = output
        .try_extract_tensor::<f32>()
        .map_err(|e| ModelError(format!("Extract error: {}", e)))?;

    let yield_kwh_per_ton = output_tensor
        .1
        .first()
        .copied()
        .ok_or_else(|| ModelError("Empty prediction output".to_string()))?;

    let inference_time = start_time.elapsed().as_micros() as u64;
    LATENCY_SUM.fetch_add(inference_time, Ordering::Relaxed);
    INFERENCE_COUNT.fetch_add(1, Ordering::Relaxed);

    Ok(yield_kwh_per_ton)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_artifact_fails() {
        let err = load_from_file("models/no_such_model.onnx").unwrap_err();
        assert!(err.0.contains("Model not found"), "got: {}", err);
    }

    #[test]
    fn test_predict_without_model_fails() {
        // No artifact exists in the test environment, so the session slot
        // stays empty and prediction must surface a load error.
        let features = FeatureVector {
            values: [50.0, 30.0, 15.0, 900.0, 0.35],
        };
        if !is_model_loaded() {
            let err = predict(&features).unwrap_err();
            assert!(err.0.contains("not loaded"), "got: {}", err);
        }
    }

    #[test]
    fn test_status_reports_unloaded_engine() {
        if !is_model_loaded() {
            let status = get_status();
            assert!(!status.model_loaded);
            assert_eq!(status.model_name, "None");
        }
    }
}
