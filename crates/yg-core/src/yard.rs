//! Yard inventory units and the steering band.

use std::fmt;

/// Container volume in twenty-foot-equivalent units.
///
/// Signed: the no-gate baseline forecast is purely additive and may go
/// negative on inconsistent inputs — that series is diagnostic only and is
/// never validated (see `yg-engine`).
pub type Teu = i64;

/// The yard's desired operating range: control-loop setpoint plus guard rails.
///
/// Invariant `min_teu <= target_teu <= max_teu` is the *caller's*
/// responsibility — the engine does not enforce it.  [`YardBand::is_ordered`]
/// is provided for callers that want to check before a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YardBand {
    pub min_teu:    Teu,
    pub target_teu: Teu,
    pub max_teu:    Teu,
}

impl YardBand {
    pub fn new(min_teu: Teu, target_teu: Teu, max_teu: Teu) -> Self {
        Self { min_teu, target_teu, max_teu }
    }

    /// Whether `min <= target <= max` holds.
    pub fn is_ordered(self) -> bool {
        self.min_teu <= self.target_teu && self.target_teu <= self.max_teu
    }
}

impl fmt::Display for YardBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{} TEU", self.min_teu, self.target_teu, self.max_teu)
    }
}
