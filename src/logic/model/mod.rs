//! Model Module - Syngas Yield Inference Engine
//!
//! Native ONNX prediction for the pre-trained yield regressor, plus artifact
//! integrity checks. The training pipeline that produces the artifact lives
//! outside this repository.

pub mod guard;
pub mod inference;

// Re-export common types
pub use inference::{EngineStatus, ModelError, ModelMetadata};
