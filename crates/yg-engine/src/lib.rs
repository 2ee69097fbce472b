//! `yg-engine` — the terminal gate slot allocation and yard-steering loop.
//!
//! Given complete per-hour lookups of vessel/rail flow and operational
//! capacity, the engine computes how many truck appointment slots to publish
//! each hour, split between inbound and outbound traffic and across move
//! classes, while steering yard inventory toward its target band and never
//! exceeding hard capacity limits.
//!
//! The whole computation is a pure, synchronous fold: the only state is a
//! yard-inventory accumulator threaded through the per-hour step function and
//! discarded when the run completes.  Repeated runs over identical inputs
//! produce identical output — there is no randomness, no clock, no I/O.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`config`]   | `SteerConfig` and its validation                     |
//! | [`baseline`] | No-gate yard occupancy forecast                      |
//! | [`steer`]    | `SlotEngine`, `compute_hour_windows`                 |
//! | [`window`]   | The per-hour `HourWindow` output record              |
//! | [`batch`]    | Running many horizons at once (`parallel` feature)   |
//! | [`vessel`]   | Planned-vs-actual vessel work-rate comparison        |
//! | [`error`]    | `SteerError`, `SteerResult`                          |

pub mod baseline;
pub mod batch;
pub mod config;
pub mod error;
pub mod steer;
pub mod vessel;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use baseline::forecast_yard_no_gate;
pub use batch::run_engines;
pub use config::SteerConfig;
pub use error::{SteerError, SteerResult};
pub use steer::{compute_hour_windows, SlotEngine};
pub use vessel::{
    compare_vessel_progress, ActualFlow, ActualFlows, VesselProgressPoint, VesselWorkWindow,
};
pub use window::HourWindow;
