//! Savings estimation engine
//!
//! Pure business logic for turning calculator inputs into an ROI estimate.
//! Deterministic: the same input always produces the same result.

use shared::{EstimationInput, EstimationResult, PROCESS_CATALOG};

/// Weeks per year used for annualization
const WEEKS_PER_YEAR: f64 = 52.0;

/// Average weeks per month used for the monthly productivity figure
const WEEKS_PER_MONTH: f64 = 4.33;

/// Estimation engine for automation savings projections
pub struct EstimatorEngine {
    /// Multiplier applied when no known process is selected
    fallback_multiplier: f64,

    /// Minimum assumed implementation cost (dollars)
    implementation_cost_floor: f64,

    /// Implementation cost as a fraction of first-year savings
    implementation_cost_rate: f64,
}

impl EstimatorEngine {
    /// Create new estimation engine with standard assumptions
    pub fn new() -> Self {
        Self {
            fallback_multiplier: 0.65,
            implementation_cost_floor: 2000.0,
            implementation_cost_rate: 0.15,
        }
    }

    /// Create with custom cost assumptions
    pub fn with_config(
        fallback_multiplier: f64,
        implementation_cost_floor: f64,
        implementation_cost_rate: f64,
    ) -> Self {
        Self {
            fallback_multiplier,
            implementation_cost_floor,
            implementation_cost_rate,
        }
    }

    /// Compute the full savings estimate for one set of inputs
    ///
    /// Negative and non-finite numeric inputs are treated as zero. When
    /// annual savings round to zero the payback period is undefined and
    /// reported as `None`.
    pub fn estimate(&self, input: &EstimationInput) -> EstimationResult {
        let hours_per_week = Self::sanitize(input.manual_hours_per_week);
        let hourly_rate = Self::sanitize(input.avg_hourly_rate);

        let annual_manual_cost = hours_per_week * hourly_rate * WEEKS_PER_YEAR;
        let multiplier = self.average_multiplier(&input.processes);

        let estimated_savings_percent = (multiplier * 100.0).round() as i64;
        let annual_savings = (annual_manual_cost * multiplier).round() as i64;
        let monthly_productivity_gain = (hours_per_week * multiplier * WEEKS_PER_MONTH).round() as i64;

        let implementation_cost = (annual_savings as f64 * self.implementation_cost_rate)
            .max(self.implementation_cost_floor);

        // Undefined payback when there are no savings to recoup against
        let payback_weeks = if annual_savings <= 0 {
            None
        } else {
            let weekly_savings = annual_savings as f64 / WEEKS_PER_YEAR;
            Some((implementation_cost / weekly_savings).round() as i64)
        };

        let five_year_value = annual_savings as f64 * 5.0 - implementation_cost;

        EstimationResult {
            annual_manual_cost,
            estimated_savings_percent,
            annual_savings,
            monthly_productivity_gain,
            payback_weeks,
            five_year_value,
        }
    }

    /// Average savings multiplier over the selected process categories
    ///
    /// Selection is treated as a set: unknown ids are ignored and repeated
    /// ids do not weight the average. An empty effective selection falls
    /// back to the conservative default multiplier.
    fn average_multiplier(&self, selected: &[String]) -> f64 {
        let multipliers: Vec<f64> = PROCESS_CATALOG
            .iter()
            .filter(|process| selected.iter().any(|id| id == process.id))
            .map(|process| process.savings_multiplier)
            .collect();

        if multipliers.is_empty() {
            self.fallback_multiplier
        } else {
            multipliers.iter().sum::<f64>() / multipliers.len() as f64
        }
    }

    /// Clamp a numeric input to a usable non-negative value
    fn sanitize(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}

impl Default for EstimatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
