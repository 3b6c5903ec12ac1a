//! Display Helpers - Readout Formatting and Chart Series
//!
//! Number formatting lives in the backend so every surface (readouts, chart
//! tooltips) renders identically. Widget layout stays in the frontend.

use serde::{Deserialize, Serialize};

use super::simulation::SimulationResult;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Pre-formatted strings for the four metric readouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readouts {
    pub syngas_yield: String,
    pub total_energy: String,
    pub co2_saved: String,
    pub revenue: String,
}

/// Series for the daily performance bar chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Round to `decimals` places and group the integer digits by thousands.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (number, fraction) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Readouts per the display contract: yield 2dp, energy and CO2 grouped 0dp,
/// revenue grouped 2dp.
pub fn readouts(result: &SimulationResult) -> Readouts {
    Readouts {
        syngas_yield: format!("{:.2}", result.syngas_yield_kwh_per_ton),
        total_energy: format_grouped(result.total_energy_kwh_per_day, 0),
        co2_saved: format_grouped(result.co2_saved_kg_per_day, 0),
        revenue: format_grouped(result.revenue_bhd_per_day, 2),
    }
}

// ============================================================================
// CHART
// ============================================================================

/// Three-category daily performance chart with fixed colors.
pub fn chart_data(result: &SimulationResult) -> ChartData {
    ChartData {
        title: "WTE Plant Daily Performance".to_string(),
        categories: vec![
            "Energy (kWh)".to_string(),
            "CO₂ Saved (kg)".to_string(),
            "Revenue (BHD)".to_string(),
        ],
        values: vec![
            result.total_energy_kwh_per_day,
            result.co2_saved_kg_per_day,
            result.revenue_bhd_per_day,
        ],
        colors: vec![
            "skyblue".to_string(),
            "green".to_string(),
            "orange".to_string(),
        ],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(24200.0, 0), "24,200");
        assert_eq!(format_grouped(16940.0, 0), "16,940");
        assert_eq!(format_grouped(847.0, 2), "847.00");
        // The derived revenue figure is off 847 by one ulp; the readout is not
        assert_eq!(format_grouped(24200.0_f64 * 0.035, 2), "847.00");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_grouping_rounds_before_splitting() {
        // 999.6 at 0dp must carry into a new group
        assert_eq!(format_grouped(999.6, 0), "1,000");
    }

    #[test]
    fn test_readouts_contract() {
        let result = SimulationResult {
            syngas_yield_kwh_per_ton: 242.0,
            total_energy_kwh_per_day: 24200.0,
            co2_saved_kg_per_day: 16940.0,
            revenue_bhd_per_day: 847.0,
            mode_label: "Static Non-AI".to_string(),
        };
        let readouts = readouts(&result);

        assert_eq!(readouts.syngas_yield, "242.00");
        assert_eq!(readouts.total_energy, "24,200");
        assert_eq!(readouts.co2_saved, "16,940");
        assert_eq!(readouts.revenue, "847.00");
    }

    #[test]
    fn test_chart_categories_and_colors_are_fixed() {
        let result = SimulationResult {
            syngas_yield_kwh_per_ton: 242.0,
            total_energy_kwh_per_day: 24200.0,
            co2_saved_kg_per_day: 16940.0,
            revenue_bhd_per_day: 847.0,
            mode_label: "Static Non-AI".to_string(),
        };
        let chart = chart_data(&result);

        assert_eq!(chart.categories.len(), 3);
        assert_eq!(chart.colors, ["skyblue", "green", "orange"]);
        assert_eq!(chart.values, [24200.0, 16940.0, 847.0]);
    }
}
