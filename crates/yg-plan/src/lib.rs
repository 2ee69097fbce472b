//! `yg-plan` — per-hour forecast lookups feeding the yardgate slot engine.
//!
//! Three plan kinds, each a complete per-horizon lookup supplied before a run
//! starts (no streaming updates):
//!
//! | Type         | Meaning                                             |
//! |--------------|-----------------------------------------------------|
//! | [`VesselPlan`] | TEU discharged onto / loaded from the yard by vessels |
//! | [`RailPlan`]   | TEU arriving / departing by rail                    |
//! | [`OpsCaps`]    | Gate and yard handling throughput limits            |
//!
//! An hour absent from a flow lookup means zero flow.  An hour absent from
//! the caps lookup means the engine publishes nothing that hour — callers who
//! want capacity gaps bridged instead run [`fill_missing_caps`] over the
//! lookup first.

pub mod error;
pub mod flows;
pub mod interpolate;
pub mod loader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PlanError, PlanResult};
pub use flows::{CapsPlan, OpsCaps, RailPlan, RailPlans, VesselPlan, VesselPlans};
pub use interpolate::fill_missing_caps;
pub use loader::{
    load_caps_csv, load_caps_reader, load_rail_plans_csv, load_rail_plans_reader,
    load_vessel_plans_csv, load_vessel_plans_reader,
};
