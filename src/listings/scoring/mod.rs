mod rules;

use serde::{Deserialize, Serialize};

use super::domain::ComputerFields;

/// Upper bound of the composite score.
pub const MAX_SCORE: f64 = 100.0;

/// The nine factors averaged into a listing's value score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Rating,
    Price,
    Resolution,
    Refresh,
    Features,
    Cpu,
    Gpu,
    Memory,
    Storage,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Price => "Price",
            Self::Resolution => "Resolution",
            Self::Refresh => "Refresh Rate",
            Self::Features => "Features",
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Memory => "RAM",
            Self::Storage => "Storage",
        }
    }
}

/// Discrete contribution to a listing score, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: f64,
    pub notes: String,
}

impl ScoreComponent {
    pub(crate) fn new(factor: ScoreFactor, score: f64, notes: String) -> Self {
        Self {
            factor,
            score,
            notes,
        }
    }
}

/// Composite score plus the sub-scores it was averaged from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}

/// Stateless scorer; the same fields always produce the same score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn breakdown(&self, fields: &ComputerFields) -> ScoreBreakdown {
        let components = rules::score_fields(fields);
        let sum: f64 = components.iter().map(|component| component.score).sum();
        let average = sum / components.len() as f64;
        let total = round_to_cents(average).min(MAX_SCORE);

        ScoreBreakdown { total, components }
    }

    pub fn score(&self, fields: &ComputerFields) -> f64 {
        self.breakdown(fields).total
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{MemorySpec, Resolution, StorageSpec};
    use crate::listings::hardware::{CpuSpec, GpuSpec};

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn empty_listing_uses_fallbacks() {
        let breakdown = ScoringEngine.breakdown(&ComputerFields::default());

        let expect = [
            (ScoreFactor::Rating, 90.0),
            (ScoreFactor::Price, 0.0),
            (ScoreFactor::Resolution, 50.0),
            (ScoreFactor::Refresh, 25.0),
            (ScoreFactor::Features, 0.0),
            (ScoreFactor::Cpu, 0.0),
            (ScoreFactor::Gpu, 20.0),
            (ScoreFactor::Memory, 6.25),
            (ScoreFactor::Storage, 6.0),
        ];
        for (factor, score) in expect {
            let component = breakdown.component(factor).expect("factor scored");
            assert!(
                close(component.score, score),
                "{} expected {score}, got {}",
                factor.label(),
                component.score
            );
        }
        // (90 + 50 + 25 + 20 + 6.25 + 6) / 9 = 21.9166...
        assert!(close(breakdown.total, 21.92));
    }

    #[test]
    fn sub_scores_are_clamped() {
        let fields = ComputerFields {
            price: Some(2000.0),
            msrp: Some(100.0),
            resolution: Resolution(7680, 4320),
            refresh: 480,
            cpu: CpuSpec {
                family: Some(9),
                ..CpuSpec::default()
            },
            gpu: GpuSpec {
                generation: Some(10),
                performance: Some(5),
                ..GpuSpec::default()
            },
            ram: MemorySpec(Some(128), None),
            storage: StorageSpec(Some(8000), None),
            ..ComputerFields::default()
        };
        let breakdown = ScoringEngine.breakdown(&fields);

        let score_of = |factor| breakdown.component(factor).expect("scored").score;
        assert!(close(score_of(ScoreFactor::Price), 0.0));
        assert!(close(score_of(ScoreFactor::Resolution), 100.0));
        assert!(close(score_of(ScoreFactor::Refresh), 100.0));
        assert!(close(score_of(ScoreFactor::Cpu), 100.0));
        assert!(close(score_of(ScoreFactor::Gpu), 0.0));
        assert!(close(score_of(ScoreFactor::Memory), 100.0));
        assert!(close(score_of(ScoreFactor::Storage), 100.0));
    }

    #[test]
    fn deep_discount_caps_price_score() {
        let fields = ComputerFields {
            price: Some(500.0),
            msrp: Some(1500.0),
            ..ComputerFields::default()
        };
        let breakdown = ScoringEngine.breakdown(&fields);
        assert!(close(
            breakdown.component(ScoreFactor::Price).expect("scored").score,
            100.0
        ));
    }

    #[test]
    fn gpu_without_performance_counts_generation_only() {
        let fields = ComputerFields {
            gpu: GpuSpec {
                generation: Some(70),
                ..GpuSpec::default()
            },
            ..ComputerFields::default()
        };
        let breakdown = ScoringEngine.breakdown(&fields);
        assert!(close(
            breakdown.component(ScoreFactor::Gpu).expect("scored").score,
            30.0
        ));
    }

    #[test]
    fn breakdown_lists_every_factor_once() {
        let breakdown = ScoringEngine.breakdown(&ComputerFields::default());
        assert_eq!(breakdown.components.len(), 9);
        let mut factors: Vec<_> = breakdown.components.iter().map(|c| c.factor).collect();
        factors.dedup();
        assert_eq!(factors.len(), 9);
    }
}
