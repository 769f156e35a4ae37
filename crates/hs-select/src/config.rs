//! Tunable selection policy constants.

use hs_core::Real;

/// Reject a discrete product line when its declared minimum power exceeds
/// this factor times the requested load: the smallest available unit would
/// be grossly oversized. Engineering assumption pending domain review.
pub const DEFAULT_OVERSIZE_LIMIT: Real = 1.5;

/// Frigorific power as a fraction of calorific power, used when a cascade
/// line does not declare its own ratio. Engineering assumption pending
/// domain review.
pub const DEFAULT_FRIGORIFIC_RATIO: Real = 0.8;

/// Absorbed electrical power as a fraction of calorific power, used when a
/// cascade line does not declare its own ratio. Engineering assumption
/// pending domain review.
pub const DEFAULT_ABSORBED_RATIO: Real = 0.25;

#[derive(Clone, Copy, Debug)]
pub struct SelectorConfig {
    pub oversize_limit: Real,
    pub default_frigorific_ratio: Real,
    pub default_absorbed_ratio: Real,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            oversize_limit: DEFAULT_OVERSIZE_LIMIT,
            default_frigorific_ratio: DEFAULT_FRIGORIFIC_RATIO,
            default_absorbed_ratio: DEFAULT_ABSORBED_RATIO,
        }
    }
}
