use serde::{Deserialize, Serialize};

/// Tolerance used when checking that the proportional components sum to one.
pub const PROPORTION_TOLERANCE: f64 = 1e-6;

/// Four sentiment components derived from a single piece of text.
///
/// `negative`, `neutral` and `positive` are proportions in `[0, 1]` that sum to
/// one. `compound` is an independently normalized polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl ScoreVector {
    /// Score assigned to missing, empty, or sentiment-free text.
    pub const NEUTRAL: ScoreVector = ScoreVector {
        negative: 0.0,
        neutral: 1.0,
        positive: 0.0,
        compound: 0.0,
    };

    pub fn new(negative: f64, neutral: f64, positive: f64, compound: f64) -> Self {
        Self {
            negative,
            neutral,
            positive,
            compound,
        }
    }

    /// Whether the components respect their documented ranges.
    pub fn is_well_formed(&self) -> bool {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        let sum = self.negative + self.neutral + self.positive;

        in_unit(self.negative)
            && in_unit(self.neutral)
            && in_unit(self.positive)
            && (-1.0..=1.0).contains(&self.compound)
            && (sum - 1.0).abs() <= PROPORTION_TOLERANCE
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for ScoreVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "neg={:.3} neu={:.3} pos={:.3} compound={:.4}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_well_formed() {
        assert!(ScoreVector::NEUTRAL.is_well_formed());
        assert_eq!(ScoreVector::default(), ScoreVector::NEUTRAL);
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        assert!(!ScoreVector::new(0.2, 0.2, 0.2, 0.0).is_well_formed());
        assert!(!ScoreVector::new(0.0, 1.0, 0.0, 1.5).is_well_formed());
        assert!(!ScoreVector::new(-0.1, 1.1, 0.0, 0.0).is_well_formed());
    }
}
