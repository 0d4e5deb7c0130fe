//! Range classifier
//!
//! Maps a number to the label of the half-open interval `[b_i, b_{i+1})`
//! containing it. The first breakpoint is inclusive; the last is the
//! exclusive upper edge of the covered domain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for classification
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Classification errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// Value is NaN or outside `[first, last)`
    #[error("value {value} is outside the covered domain [{lower}, {upper})")]
    OutOfDomain {
        /// Rejected value
        value: f64,
        /// First breakpoint
        lower: f64,
        /// Last breakpoint
        upper: f64,
    },

    /// Breakpoints/labels do not describe a gap-free ascending partition
    #[error("invalid ranges: {0}")]
    InvalidRanges(String),
}

impl ClassifyError {
    /// Symbolic error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OutOfDomain { .. } => "DOMAIN_ERROR",
            Self::InvalidRanges(_) => "INVALID_RANGES",
        }
    }
}

/// One interval of a classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound
    pub upper: f64,
    /// Category label
    pub label: String,
}

impl Bin {
    /// True when `value` lies in `[lower, upper)`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

/// Ordered breakpoints with one label per gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRangeClassifier")]
pub struct RangeClassifier {
    breakpoints: Vec<f64>,
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct RawRangeClassifier {
    breakpoints: Vec<f64>,
    labels: Vec<String>,
}

impl TryFrom<RawRangeClassifier> for RangeClassifier {
    type Error = ClassifyError;

    fn try_from(raw: RawRangeClassifier) -> Result<Self, Self::Error> {
        Self::new(raw.breakpoints, raw.labels)
    }
}

impl RangeClassifier {
    /// Builds a classifier from ascending breakpoints and `breakpoints - 1` labels
    pub fn new<L: Into<String>>(
        breakpoints: Vec<f64>,
        labels: impl IntoIterator<Item = L>,
    ) -> ClassifyResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if breakpoints.len() < 2 {
            return Err(ClassifyError::InvalidRanges(
                "at least two breakpoints are required".into(),
            ));
        }
        if labels.len() + 1 != breakpoints.len() {
            return Err(ClassifyError::InvalidRanges(format!(
                "{} breakpoints need {} labels, got {}",
                breakpoints.len(),
                breakpoints.len() - 1,
                labels.len()
            )));
        }
        if breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(ClassifyError::InvalidRanges(
                "breakpoints must be finite".into(),
            ));
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ClassifyError::InvalidRanges(
                "breakpoints must be strictly ascending".into(),
            ));
        }

        Ok(Self {
            breakpoints,
            labels,
        })
    }

    /// Population counts: `< 10M` up to `≥ 500M`, covering `[0, 2e9)`
    #[must_use]
    pub fn population() -> Self {
        Self {
            breakpoints: vec![0.0, 1e7, 5e7, 1e8, 5e8, 2e9],
            labels: ["< 10M", "10M–50M", "50M–100M", "100M–500M", "≥ 500M"]
                .map(String::from)
                .to_vec(),
        }
    }

    /// Share of world population in percent, covering `[0, 25)`
    #[must_use]
    pub fn world_share() -> Self {
        Self {
            breakpoints: vec![0.0, 0.05, 0.1, 0.5, 1.0, 3.0, 10.0, 25.0],
            labels: [
                "< 0.05%",
                "0.05–0.1%",
                "0.1–0.5%",
                "0.5–1%",
                "1–3%",
                "3–10%",
                "≥ 10%",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Label of the interval containing `value`
    pub fn classify(&self, value: f64) -> ClassifyResult<&str> {
        self.bin_index(value).map(|i| self.labels[i].as_str())
    }

    /// Index of the interval containing `value`
    pub fn bin_index(&self, value: f64) -> ClassifyResult<usize> {
        // Number of breakpoints <= value; NaN compares false and lands on 0
        let above = self.breakpoints.partition_point(|b| *b <= value);
        if above == 0 || above == self.breakpoints.len() {
            return Err(ClassifyError::OutOfDomain {
                value,
                lower: self.lower(),
                upper: self.upper(),
            });
        }
        Ok(above - 1)
    }

    /// Labels in ascending order
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Breakpoints in ascending order
    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Inclusive lower edge of the domain
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.breakpoints[0]
    }

    /// Exclusive upper edge of the domain
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Intervals in ascending order
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.breakpoints
            .windows(2)
            .zip(&self.labels)
            .map(|(w, label)| Bin {
                lower: w[0],
                upper: w[1],
                label: label.clone(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Construction =====

    #[test]
    fn test_new_valid() {
        let c = RangeClassifier::new(vec![0.0, 1.0, 2.0], ["low", "high"]).unwrap();
        assert_eq!(c.labels(), &["low".to_string(), "high".to_string()]);
    }

    #[test]
    fn test_new_rejects_label_count() {
        let err = RangeClassifier::new(vec![0.0, 1.0, 2.0], ["only"]).unwrap_err();
        assert_eq!(err.code(), "INVALID_RANGES");
    }

    #[test]
    fn test_new_rejects_unsorted() {
        assert!(RangeClassifier::new(vec![0.0, 2.0, 1.0], ["a", "b"]).is_err());
        assert!(RangeClassifier::new(vec![0.0, 0.0], ["a"]).is_err());
    }

    #[test]
    fn test_new_rejects_too_few_or_non_finite() {
        assert!(RangeClassifier::new(vec![0.0], Vec::<String>::new()).is_err());
        assert!(RangeClassifier::new(vec![0.0, f64::INFINITY], ["a"]).is_err());
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in [RangeClassifier::population(), RangeClassifier::world_share()] {
            let rebuilt =
                RangeClassifier::new(preset.breakpoints().to_vec(), preset.labels().to_vec())
                    .unwrap();
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn test_deserialize_validates_ranges() {
        let json = serde_json::to_string(&RangeClassifier::world_share()).unwrap();
        let back: RangeClassifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RangeClassifier::world_share());

        let missing_labels = r#"{"breakpoints":[0.0,1.0,2.0],"labels":[]}"#;
        assert!(serde_json::from_str::<RangeClassifier>(missing_labels).is_err());
        let empty = r#"{"breakpoints":[],"labels":[]}"#;
        assert!(serde_json::from_str::<RangeClassifier>(empty).is_err());
        let descending = r#"{"breakpoints":[2.0,1.0],"labels":["x"]}"#;
        assert!(serde_json::from_str::<RangeClassifier>(descending).is_err());
    }

    // ===== Classification =====

    #[test]
    fn test_lowest_bound_inclusive() {
        assert_eq!(RangeClassifier::population().classify(0.0), Ok("< 10M"));
    }

    #[test]
    fn test_breakpoint_opens_next_bin() {
        let c = RangeClassifier::population();
        assert_eq!(c.classify(1e7), Ok("10M–50M"));
        assert_eq!(c.classify(9_999_999.0), Ok("< 10M"));
        assert_eq!(c.classify(5e8), Ok("≥ 500M"));
    }

    #[test]
    fn test_population_examples() {
        let c = RangeClassifier::population();
        assert_eq!(c.classify(51_815_810.0), Ok("50M–100M"));
        assert_eq!(c.classify(1_425_887_337.0), Ok("≥ 500M"));
    }

    #[test]
    fn test_world_share_examples() {
        let c = RangeClassifier::world_share();
        assert_eq!(c.classify(0.01), Ok("< 0.05%"));
        assert_eq!(c.classify(0.05), Ok("0.05–0.1%"));
        assert_eq!(c.classify(17.88), Ok("≥ 10%"));
    }

    #[test]
    fn test_out_of_domain() {
        let c = RangeClassifier::world_share();
        assert!(matches!(
            c.classify(-0.1),
            Err(ClassifyError::OutOfDomain { .. })
        ));
        assert!(c.classify(25.0).is_err());
        assert!(c.classify(f64::NAN).is_err());
        assert_eq!(c.classify(-1.0).unwrap_err().code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_bins() {
        let bins: Vec<Bin> = RangeClassifier::population().bins().collect();
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[0].upper, 1e7);
        assert_eq!(bins[4].label, "≥ 500M");
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
    }

    proptest! {
        #[test]
        fn prop_exactly_one_bin(value in 0.0f64..25.0) {
            let c = RangeClassifier::world_share();
            let label = c.classify(value).unwrap();
            let matching: Vec<Bin> = c.bins().filter(|b| b.contains(value)).collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert_eq!(matching[0].label.as_str(), label);
        }

        #[test]
        fn prop_population_domain_covered(value in 0.0f64..2e9) {
            prop_assert!(RangeClassifier::population().classify(value).is_ok());
        }
    }
}
