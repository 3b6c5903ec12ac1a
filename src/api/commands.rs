//! Tauri Commands - API for the Frontend
//!
//! One command per operator interaction. Every payload is serde-serialized;
//! errors cross the bridge as strings.

use serde::{Deserialize, Serialize};

use crate::logic::display::{self, ChartData, Readouts};
use crate::logic::input::{InputBounds, SimulationInput, BOUNDS};
use crate::logic::model::{guard, inference, EngineStatus, ModelMetadata};
use crate::logic::simulation::{self, SimulationResult, YieldMode};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Everything the frontend needs to render one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationView {
    pub mode_label: String,
    pub result: SimulationResult,
    pub readouts: Readouts,
    pub chart: ChartData,
}

fn build_view(result: SimulationResult) -> SimulationView {
    SimulationView {
        mode_label: result.mode_label.clone(),
        readouts: display::readouts(&result),
        chart: display::chart_data(&result),
        result,
    }
}

// ============================================================================
// SIMULATION COMMANDS
// ============================================================================

/// Run one full simulation from the current slider state.
///
/// Inputs are clamped to the operating envelope before computation, so the
/// core never sees an out-of-range value.
#[tauri::command]
pub async fn run_simulation(
    input: SimulationInput,
    ai_mode: bool,
) -> Result<SimulationView, String> {
    let input = input.clamped();
    let mode = YieldMode::from_toggle(ai_mode);

    let result = simulation::simulate(&input, mode).map_err(|e| e.to_string())?;
    Ok(build_view(result))
}

/// Slider ranges and defaults for the frontend controls
#[tauri::command]
pub async fn get_input_bounds() -> Result<InputBounds, String> {
    Ok(BOUNDS)
}

/// Initial slider positions
#[tauri::command]
pub async fn get_default_input() -> Result<SimulationInput, String> {
    Ok(SimulationInput::default())
}

// ============================================================================
// MODEL COMMANDS
// ============================================================================

/// Inference engine status for the UI header
#[tauri::command]
pub async fn get_engine_status() -> Result<EngineStatus, String> {
    Ok(inference::get_status())
}

/// Metadata of the loaded artifact, if any
#[tauri::command]
pub async fn get_model_metadata() -> Result<Option<ModelMetadata>, String> {
    Ok(inference::get_metadata())
}

/// Check if the yield model is loaded
#[tauri::command]
pub async fn is_model_loaded() -> Result<bool, String> {
    Ok(inference::is_model_loaded())
}

/// Verify the artifact against its checksum sidecar
#[tauri::command]
pub async fn verify_model_checksum() -> Result<bool, String> {
    guard::verify_checksum().map_err(|e| e.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_carries_formatted_readouts_and_chart() {
        let result = SimulationResult {
            syngas_yield_kwh_per_ton: 242.0,
            total_energy_kwh_per_day: 24200.0,
            co2_saved_kg_per_day: 16940.0,
            revenue_bhd_per_day: 847.0,
            mode_label: "Static Non-AI".to_string(),
        };
        let view = build_view(result);

        assert_eq!(view.mode_label, "Static Non-AI");
        assert_eq!(view.readouts.total_energy, "24,200");
        assert_eq!(view.chart.values, [24200.0, 16940.0, 847.0]);
        assert_eq!(view.result.revenue_bhd_per_day, 847.0);
    }
}
