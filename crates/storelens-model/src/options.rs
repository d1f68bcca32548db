//! Analysis configuration: division policy and ranking weights.

use crate::error::{AnalysisError, Result};

/// Policy for divisions the source data leaves unguarded.
///
/// Three computations in the pipeline divide by a quantity that can be
/// zero: the shipping percentage (price), the growth rate (first-month
/// revenue) and min-max normalization (column range). The policy decides
/// what happens when the divisor is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Abort the run with a descriptive error.
    #[default]
    Reject,
    /// Substitute `0.0` for the undefined quotient.
    Zero,
    /// Let `NaN` flow through the downstream computations.
    Propagate,
}

impl DivisionPolicy {
    /// Resolve an undefined quotient according to the policy.
    ///
    /// `reject` builds the error returned under [`DivisionPolicy::Reject`];
    /// it is only invoked in that case.
    pub fn undefined(self, reject: impl FnOnce() -> AnalysisError) -> Result<f64> {
        match self {
            Self::Reject => Err(reject()),
            Self::Zero => Ok(0.0),
            Self::Propagate => Ok(f64::NAN),
        }
    }
}

/// Weights blending the four normalized metric groups into the final score.
///
/// The financial and satisfaction groups each average two normalized
/// columns before weighting. Weights must sum to 1.0 so the composite
/// score stays in `[0, 1]` whenever its inputs do.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankingWeights {
    /// Weight of (normalized revenue + normalized average sale) / 2.
    pub revenue: f64,
    /// Weight of (normalized average rating + normalized five-star share) / 2.
    pub satisfaction: f64,
    /// Weight of normalized shipping efficiency.
    pub shipping: f64,
    /// Weight of normalized growth rate.
    pub growth: f64,
}

impl RankingWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Build a custom weight set, rejecting weights that do not sum to 1.0.
    pub fn new(revenue: f64, satisfaction: f64, shipping: f64, growth: f64) -> Result<Self> {
        let sum = revenue + satisfaction + shipping + growth;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(AnalysisError::InvalidWeights { sum });
        }
        Ok(Self {
            revenue,
            satisfaction,
            shipping,
            growth,
        })
    }

    pub fn sum(&self) -> f64 {
        self.revenue + self.satisfaction + self.shipping + self.growth
    }
}

impl Default for RankingWeights {
    /// The fixed production weights: 30% financial, 25% satisfaction,
    /// 25% shipping efficiency, 20% growth.
    fn default() -> Self {
        Self {
            revenue: 0.30,
            satisfaction: 0.25,
            shipping: 0.25,
            growth: 0.20,
        }
    }
}

/// Options for a full analysis run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub division_policy: DivisionPolicy,
    pub weights: RankingWeights,
}
