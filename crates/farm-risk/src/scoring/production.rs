use super::components::{unit, RiskFactor, ScoreComponent, SubScore};
use super::config::ScoringConfig;
use crate::profiles::{ProductionProfile, YieldRecord};

const YIELD_STABILITY_WEIGHT: f64 = 0.4;
const DIVERSIFICATION_WEIGHT: f64 = 0.3;
const INPUT_COST_WEIGHT: f64 = 0.3;
const DIVERSIFICATION_TARGET: f64 = 3.0;

pub(crate) fn score_production(profile: &ProductionProfile, config: &ScoringConfig) -> SubScore {
    let mut components = Vec::with_capacity(3);

    // Stability needs at least two harvests; otherwise the factor is left out
    // and the remaining weights are renormalized.
    if profile.yield_history.len() >= 2 {
        let (stability, cov) = yield_stability(&profile.yield_history);
        components.push(ScoreComponent::new(
            RiskFactor::YieldStability,
            stability,
            YIELD_STABILITY_WEIGHT,
            format!(
                "coefficient of variation {:.2} across {} harvests",
                cov,
                profile.yield_history.len()
            ),
        ));
    }

    let crops = profile.distinct_crop_count();
    components.push(ScoreComponent::new(
        RiskFactor::CropDiversification,
        unit(crops as f64 / DIVERSIFICATION_TARGET),
        DIVERSIFICATION_WEIGHT,
        format!("{crops} distinct crop type(s)"),
    ));

    let total_cost = profile.input_costs.total().max(0.0);
    let normalized_cost = unit(total_cost / config.input_cost_ceiling);
    components.push(ScoreComponent::new(
        RiskFactor::InputCostEfficiency,
        1.0 - normalized_cost,
        INPUT_COST_WEIGHT,
        format!(
            "input costs {:.0} against ceiling {:.0}",
            total_cost, config.input_cost_ceiling
        ),
    ));

    SubScore::renormalized(components)
}

/// Returns `(stability, coefficient_of_variation)` using the population deviation.
fn yield_stability(history: &[YieldRecord]) -> (f64, f64) {
    let count = history.len() as f64;
    let mean = history.iter().map(|record| record.yield_amount).sum::<f64>() / count;
    if mean <= 0.0 || !mean.is_finite() {
        return (0.0, f64::INFINITY);
    }

    let variance = history
        .iter()
        .map(|record| (record.yield_amount - mean).powi(2))
        .sum::<f64>()
        / count;
    let cov = variance.sqrt() / mean;

    ((1.0 - cov).max(0.0), cov)
}
