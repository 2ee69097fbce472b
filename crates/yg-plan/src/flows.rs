//! Plan value types and their hour-keyed lookup aliases.

use rustc_hash::FxHashMap;

use yg_core::{HourStamp, Teu};

/// Planned vessel exchange for one hour.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselPlan {
    pub hour:          HourStamp,
    /// TEU moved off vessels onto the yard this hour.
    pub discharge_teu: Teu,
    /// TEU moved from the yard onto vessels this hour.
    pub load_teu:      Teu,
    /// Names of vessels being worked this hour.
    pub vessels:       Vec<String>,
}

impl VesselPlan {
    /// A zero-flow plan for `hour` — what an absent lookup entry means.
    pub fn zero(hour: HourStamp) -> Self {
        Self { hour, discharge_teu: 0, load_teu: 0, vessels: Vec::new() }
    }

    /// Net TEU added to the yard (discharge − load).
    #[inline]
    pub fn net_teu(&self) -> Teu {
        self.discharge_teu - self.load_teu
    }
}

/// Planned rail exchange for one hour.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailPlan {
    pub hour:    HourStamp,
    /// TEU arriving by rail this hour.
    pub in_teu:  Teu,
    /// TEU departing by rail this hour.
    pub out_teu: Teu,
    /// Names of trains being worked this hour.
    pub trains:  Vec<String>,
}

impl RailPlan {
    pub fn zero(hour: HourStamp) -> Self {
        Self { hour, in_teu: 0, out_teu: 0, trains: Vec::new() }
    }

    /// Net TEU added to the yard (in − out).
    #[inline]
    pub fn net_teu(&self) -> Teu {
        self.in_teu - self.out_teu
    }
}

/// Operational capacity limits for one hour.
///
/// No `zero` constructor on purpose: an absent caps entry is *not* zero
/// capacity filled in silently — it is "nothing may be published this hour",
/// and the engine encodes that in its output instead of defaulting.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpsCaps {
    pub hour:                 HourStamp,
    /// Trucks the gate can process per hour (both directions combined).
    pub gate_trucks_per_hour: u32,
    /// Container moves the yard equipment can perform per hour.
    pub yard_moves_per_hour:  u32,
}

// ── Lookup aliases ────────────────────────────────────────────────────────────

/// Hour → vessel exchange.  Absent hour ⇒ zero flow.
pub type VesselPlans = FxHashMap<HourStamp, VesselPlan>;

/// Hour → rail exchange.  Absent hour ⇒ zero flow.
pub type RailPlans = FxHashMap<HourStamp, RailPlan>;

/// Hour → capacity limits.  Absent hour ⇒ no publishable capacity.
pub type CapsPlan = FxHashMap<HourStamp, OpsCaps>;
