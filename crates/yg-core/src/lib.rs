//! `yg-core` — foundational types for the `yardgate` slot allocation engine.
//!
//! This crate is a dependency of every other `yg-*` crate.  It intentionally
//! has no `yg-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`time`]     | `HourStamp`, `Horizon`                             |
//! | [`moves`]    | `MoveClass`, `Direction`                           |
//! | [`yard`]     | `Teu`, `YardBand`                                  |
//! | [`error`]    | `YgError`, `YgResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod moves;
pub mod time;
pub mod yard;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{YgError, YgResult};
pub use moves::{Direction, MoveClass};
pub use time::{Horizon, HourStamp};
pub use yard::{Teu, YardBand};
