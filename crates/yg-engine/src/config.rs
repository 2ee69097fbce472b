//! Steering run configuration.

use yg_core::{Teu, YardBand};

use crate::{SteerError, SteerResult};

/// Parameters of one steering run, fixed for the whole horizon.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteerConfig {
    /// Yard inventory at one hour before the horizon start.
    pub initial_yard_teu: Teu,

    /// Target occupancy band the loop steers toward.
    pub band: YardBand,

    /// Average TEU handled per truck visit (typically ≈ 1.3–1.6).
    /// Converts between yard moves and truck counts.  Must be > 0.
    pub avg_teu_per_truck: f64,

    /// Fraction of raw throughput withheld from publication, in [0, 1).
    /// Held back for contingencies (breakdowns, priority moves) so the gate
    /// never sells 100% of theoretical capacity.
    pub reserve_rho: f64,
}

impl SteerConfig {
    /// Check the two hard preconditions.
    ///
    /// Called by the engine before any hour is processed; a failure here
    /// produces no partial output.
    pub fn validate(&self) -> SteerResult<()> {
        if self.avg_teu_per_truck <= 0.0 || !self.avg_teu_per_truck.is_finite() {
            return Err(SteerError::BadTeuPerTruck(self.avg_teu_per_truck));
        }
        if !(0.0..1.0).contains(&self.reserve_rho) {
            return Err(SteerError::BadReserveRho(self.reserve_rho));
        }
        Ok(())
    }
}
