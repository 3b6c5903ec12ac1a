//! Logic Module - Simulation Engines
//!
//! - `input` - operator parameter envelope and clamping
//! - `features` - fixed-order model feature vector
//! - `model/` - ONNX inference and artifact integrity
//! - `simulation` - yield estimate and derived metrics
//! - `display` - readout formatting and chart series

pub mod display;
pub mod features;
pub mod input;
pub mod model;
pub mod simulation;
