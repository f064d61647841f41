use super::components::{unit, RiskFactor, ScoreComponent, SubScore};
use crate::profiles::{BehavioralBackground, EngagementLevel, Frequency};

const UPDATE_FREQUENCY_WEIGHT: f64 = 0.3;
const TIMELINESS_WEIGHT: f64 = 0.3;
const TRAINING_WEIGHT: f64 = 0.2;
const ADVISORY_WEIGHT: f64 = 0.2;
const TRAINING_TARGET: f64 = 3.0;

pub(crate) fn score_behavioral(background: &BehavioralBackground) -> SubScore {
    let trainings = background.training_participation.len();

    SubScore::summed(vec![
        ScoreComponent::new(
            RiskFactor::UpdateFrequency,
            frequency_value(background.data_update_frequency),
            UPDATE_FREQUENCY_WEIGHT,
            format!("{} data updates", background.data_update_frequency.label()),
        ),
        ScoreComponent::new(
            RiskFactor::Timeliness,
            unit(background.timeliness_score),
            TIMELINESS_WEIGHT,
            format!("timeliness {:.2}", background.timeliness_score),
        ),
        ScoreComponent::new(
            RiskFactor::TrainingParticipation,
            unit(trainings as f64 / TRAINING_TARGET),
            TRAINING_WEIGHT,
            format!("{trainings} training session(s) attended"),
        ),
        ScoreComponent::new(
            RiskFactor::AdvisoryEngagement,
            advisory_value(background.advisory_engagement),
            ADVISORY_WEIGHT,
            format!(
                "{} advisory engagement",
                background.advisory_engagement.label()
            ),
        ),
    ])
}

const fn frequency_value(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Rare => 0.2,
        Frequency::Monthly => 0.5,
        Frequency::Weekly => 0.8,
        Frequency::Daily => 1.0,
    }
}

const fn advisory_value(level: EngagementLevel) -> f64 {
    match level {
        EngagementLevel::Low => 0.3,
        EngagementLevel::Medium => 0.6,
        EngagementLevel::High => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_contribution_caps_at_three_sessions() {
        let background = BehavioralBackground {
            training_participation: ["A", "B", "C", "D", "E"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ..BehavioralBackground::default()
        };
        let result = score_behavioral(&background);
        let training = result
            .components
            .iter()
            .find(|component| component.factor == RiskFactor::TrainingParticipation)
            .expect("training component present");
        assert_eq!(training.value, 1.0);
    }

    #[test]
    fn out_of_range_timeliness_is_clamped() {
        let background = BehavioralBackground {
            timeliness_score: 4.0,
            ..BehavioralBackground::default()
        };
        let result = score_behavioral(&background);
        assert!(result.score <= 1.0);
        // 0.3 * 0.2 + 0.3 * 1.0 + 0.0 + 0.2 * 0.3
        assert!((result.score - 0.42).abs() < 1e-9);
    }

    #[test]
    fn weakest_background_scores_minimum() {
        let result = score_behavioral(&BehavioralBackground::default());
        assert!((result.score - 0.12).abs() < 1e-9);
    }
}
