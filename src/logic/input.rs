//! Input Collector - Operator-Set Plant Parameters
//!
//! The six bounded sliders the operator controls. Bounds live here as the
//! single source of truth; the frontend configures its controls from
//! `InputBounds` and the command layer clamps before any computation, so the
//! simulation core never has to validate.

use serde::{Deserialize, Serialize};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One full set of operator inputs for a simulation run.
///
/// Recreated on every interaction; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Organic content of the feedstock (%)
    pub organic_pct: f64,
    /// Moisture content of the feedstock (%)
    pub moisture_pct: f64,
    /// Plastic content of the feedstock (%)
    pub plastic_pct: f64,
    /// Gasifier operating temperature (°C)
    pub gasifier_temp_c: f64,
    /// Equivalence ratio (actual / stoichiometric oxidant)
    pub equivalence_ratio: f64,
    /// Feedstock throughput (tons per day)
    pub feedstock_rate_tpd: f64,
}

/// Closed range of one slider
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Slider configuration for the frontend
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputBounds {
    pub organic_pct: Range,
    pub moisture_pct: Range,
    pub plastic_pct: Range,
    pub gasifier_temp_c: Range,
    pub equivalence_ratio: Range,
    pub feedstock_rate_tpd: Range,
}

// ============================================================================
// BOUNDS
// ============================================================================

/// The operating envelope of the simulated plant
pub const BOUNDS: InputBounds = InputBounds {
    organic_pct: Range::new(20.0, 80.0, 50.0),
    moisture_pct: Range::new(10.0, 60.0, 30.0),
    plastic_pct: Range::new(5.0, 40.0, 15.0),
    gasifier_temp_c: Range::new(700.0, 1200.0, 900.0),
    equivalence_ratio: Range::new(0.2, 0.6, 0.35),
    feedstock_rate_tpd: Range::new(50.0, 200.0, 100.0),
};

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            organic_pct: BOUNDS.organic_pct.default,
            moisture_pct: BOUNDS.moisture_pct.default,
            plastic_pct: BOUNDS.plastic_pct.default,
            gasifier_temp_c: BOUNDS.gasifier_temp_c.default,
            equivalence_ratio: BOUNDS.equivalence_ratio.default,
            feedstock_rate_tpd: BOUNDS.feedstock_rate_tpd.default,
        }
    }
}

impl SimulationInput {
    /// Pin every field inside the operating envelope.
    ///
    /// The frontend sliders already enforce these ranges; clamping here keeps
    /// the envelope guarantee even for hand-crafted payloads.
    pub fn clamped(&self) -> Self {
        Self {
            organic_pct: BOUNDS.organic_pct.clamp(self.organic_pct),
            moisture_pct: BOUNDS.moisture_pct.clamp(self.moisture_pct),
            plastic_pct: BOUNDS.plastic_pct.clamp(self.plastic_pct),
            gasifier_temp_c: BOUNDS.gasifier_temp_c.clamp(self.gasifier_temp_c),
            equivalence_ratio: BOUNDS.equivalence_ratio.clamp(self.equivalence_ratio),
            feedstock_rate_tpd: BOUNDS.feedstock_rate_tpd.clamp(self.feedstock_rate_tpd),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
