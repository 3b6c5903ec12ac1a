//! Simulation Core - Yield Estimate and Derived Plant Metrics
//!
//! Pure mapping from operator inputs to a result set. No display concerns,
//! no state: every interaction recomputes everything from scratch, which is
//! what keeps this independently testable.

use serde::{Deserialize, Serialize};

use super::features::FeatureVector;
use super::input::SimulationInput;
use super::model::{inference, ModelError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Static baseline: intercept and per-feature slopes (kWh/ton).
///
/// The baseline deliberately ignores gasifier temperature and equivalence
/// ratio; only the AI model uses all five features.
const STATIC_BASE: f64 = 220.0;
const ORGANIC_SLOPE: f64 = 0.5;
const MOISTURE_SLOPE: f64 = 0.4;
const PLASTIC_SLOPE: f64 = 0.6;

/// kg of CO2 offset per kWh produced
const CO2_FACTOR: f64 = 0.7;

/// Feed-in revenue per kWh, in Bahraini Dinar
const REVENUE_RATE_BHD: f64 = 0.035;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Which yield estimator drives the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldMode {
    AiOptimized,
    StaticBaseline,
}

impl YieldMode {
    pub fn from_toggle(ai_enabled: bool) -> Self {
        if ai_enabled {
            Self::AiOptimized
        } else {
            Self::StaticBaseline
        }
    }

    /// Label shown next to the result readouts
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiOptimized => "AI-Optimized",
            Self::StaticBaseline => "Static Non-AI",
        }
    }
}

/// One complete simulation outcome.
///
/// Immutable once computed; discarded on the next interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub syngas_yield_kwh_per_ton: f64,
    pub total_energy_kwh_per_day: f64,
    pub co2_saved_kg_per_day: f64,
    pub revenue_bhd_per_day: f64,
    pub mode_label: String,
}

// ============================================================================
// YIELD CALCULATOR
// ============================================================================

/// Closed-form baseline estimate (kWh/ton).
pub fn static_yield(input: &SimulationInput) -> f64 {
    STATIC_BASE + ORGANIC_SLOPE * input.organic_pct - MOISTURE_SLOPE * input.moisture_pct
        + PLASTIC_SLOPE * input.plastic_pct
}

/// Syngas yield estimate for the selected mode.
///
/// Inputs are assumed to be inside the operating envelope; the input
/// collector clamps before calling.
pub fn compute_yield(input: &SimulationInput, mode: YieldMode) -> Result<f64, ModelError> {
    match mode {
        YieldMode::AiOptimized => {
            let features = FeatureVector::from_input(input);
            Ok(f64::from(inference::predict(&features)?))
        }
        YieldMode::StaticBaseline => Ok(static_yield(input)),
    }
}

// ============================================================================
// METRICS DERIVATION
// ============================================================================

/// Daily energy, CO2 offset, and revenue from a yield estimate.
pub fn derive_metrics(yield_kwh_per_ton: f64, throughput_tpd: f64) -> (f64, f64, f64) {
    let total_energy = yield_kwh_per_ton * throughput_tpd;
    let co2_saved = total_energy * CO2_FACTOR;
    let revenue = total_energy * REVENUE_RATE_BHD;
    (total_energy, co2_saved, revenue)
}

/// Full pipeline: inputs + mode -> result set.
pub fn simulate(input: &SimulationInput, mode: YieldMode) -> Result<SimulationResult, ModelError> {
    let syngas_yield = compute_yield(input, mode)?;
    let (total_energy, co2_saved, revenue) = derive_metrics(syngas_yield, input.feedstock_rate_tpd);

    Ok(SimulationResult {
        syngas_yield_kwh_per_ton: syngas_yield,
        total_energy_kwh_per_day: total_energy,
        co2_saved_kg_per_day: co2_saved,
        revenue_bhd_per_day: revenue,
        mode_label: mode.label().to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> SimulationInput {
        SimulationInput {
            organic_pct: 50.0,
            moisture_pct: 30.0,
            plastic_pct: 15.0,
            gasifier_temp_c: 900.0,
            equivalence_ratio: 0.35,
            feedstock_rate_tpd: 100.0,
        }
    }

    #[test]
    fn test_static_yield_worked_example() {
        // 220 + 0.5*50 - 0.4*30 + 0.6*15 = 242
        assert_eq!(static_yield(&reference_input()), 242.0);
    }

    #[test]
    fn test_static_yield_ignores_temp_and_er() {
        let base = reference_input();
        let mut hot = base;
        hot.gasifier_temp_c = 1200.0;
        hot.equivalence_ratio = 0.6;

        assert_eq!(static_yield(&base), static_yield(&hot));
    }

    #[test]
    fn test_static_yield_slopes() {
        let base = reference_input();

        let mut more_organic = base;
        more_organic.organic_pct += 10.0;
        assert_eq!(static_yield(&more_organic) - static_yield(&base), 5.0);

        let mut more_plastic = base;
        more_plastic.plastic_pct += 10.0;
        assert_eq!(static_yield(&more_plastic) - static_yield(&base), 6.0);

        let mut wetter = base;
        wetter.moisture_pct += 10.0;
        assert_eq!(static_yield(&wetter) - static_yield(&base), -4.0);
    }

    #[test]
    fn test_derive_metrics_identities() {
        let (energy, co2, revenue) = derive_metrics(242.0, 100.0);
        assert_eq!(energy, 24200.0);
        assert_eq!(co2, 16940.0);
        // 24200*0.035 is 847 up to one ulp in f64; the readout rounds to 847.00
        assert_eq!(revenue, 24200.0 * 0.035);
        assert!((revenue - 847.0).abs() < 1e-9);

        // The identities hold at arbitrary points, not just the example
        let (energy, co2, revenue) = derive_metrics(317.5, 163.0);
        assert_eq!(energy, 317.5 * 163.0);
        assert_eq!(co2, energy * 0.7);
        assert_eq!(revenue, energy * 0.035);
    }

    #[test]
    fn test_simulate_static_full_pipeline() {
        let result = simulate(&reference_input(), YieldMode::StaticBaseline).unwrap();

        assert_eq!(result.syngas_yield_kwh_per_ton, 242.0);
        assert_eq!(result.total_energy_kwh_per_day, 24200.0);
        assert_eq!(result.co2_saved_kg_per_day, 16940.0);
        assert!((result.revenue_bhd_per_day - 847.0).abs() < 1e-9);
        assert_eq!(result.mode_label, "Static Non-AI");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(YieldMode::from_toggle(true).label(), "AI-Optimized");
        assert_eq!(YieldMode::from_toggle(false).label(), "Static Non-AI");
    }

    #[test]
    fn test_ai_mode_without_model_propagates_error() {
        if !inference::is_model_loaded() {
            let err = simulate(&reference_input(), YieldMode::AiOptimized).unwrap_err();
            assert!(err.0.contains("not loaded"), "got: {}", err);
        }
    }
}
