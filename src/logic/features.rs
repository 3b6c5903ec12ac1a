//! Feature Vector - Core data structure for ML input
//!
//! The model was trained on exactly five features in a fixed order. Keep the
//! ordering centralized here; never build a raw `Vec<f32>` for the model
//! anywhere else.

use serde::{Deserialize, Serialize};

use super::input::SimulationInput;

/// Number of features the regressor consumes
pub const FEATURE_COUNT: usize = 5;

/// Feature order as used during training
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "organic_pct",
    "moisture_pct",
    "plastic_pct",
    "gasifier_temp_c",
    "equivalence_ratio",
];

/// Ordered feature values for one prediction.
///
/// Note: `feedstock_rate_tpd` is deliberately absent - throughput scales the
/// derived metrics but is not a model input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_input(input: &SimulationInput) -> Self {
        Self {
            values: [
                input.organic_pct as f32,
                input.moisture_pct as f32,
                input.plastic_pct as f32,
                input.gasifier_temp_c as f32,
                input.equivalence_ratio as f32,
            ],
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by layout name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        FEATURE_LAYOUT
            .iter()
            .position(|&n| n == name)
            .map(|i| self.values[i])
    }
}
