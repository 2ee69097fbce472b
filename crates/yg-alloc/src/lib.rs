//! `yg-alloc` — splitting a direction's slot budget across move classes.
//!
//! The steering loop decides *how many* trucks to let in and out each hour;
//! this crate decides *which kinds* of truck visit those slots are published
//! for.  The split is a weighted round-robin over a fixed class order, bounded
//! by per-class caps (reefer plug counts, dangerous-goods windows,
//! time-restricted blocks) supplied by a [`SlotPolicy`].
//!
//! Everything here is pure and deterministic: fixed inputs always produce the
//! same distribution.

pub mod caps;
pub mod policy;
pub mod rr;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use caps::{ClassAlloc, ClassCaps};
pub use policy::{SlotPolicy, UniformPolicy};
pub use rr::allocate_weighted;
