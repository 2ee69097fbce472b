//! The `SlotPolicy` trait — the main extension point for terminal-specific
//! slot rules.

use yg_core::{HourStamp, MoveClass};

use crate::ClassCaps;

/// Pluggable per-terminal slot rules.
///
/// Both hooks have defaults, so the simplest policy is an empty impl: no
/// class caps, equal weights.  The engine calls [`class_caps`][Self::class_caps]
/// once per hour per direction and [`class_weight`][Self::class_weight] from
/// inside the round-robin, so implementations should be cheap — precompute
/// anything expensive at construction.
///
/// # Example — cap reefer-adjacent pickups at night
///
/// ```rust,ignore
/// struct NightReeferCap;
///
/// impl SlotPolicy for NightReeferCap {
///     fn class_caps(&self, hour: HourStamp) -> ClassCaps {
///         if hour.0 % 24 >= 22 || hour.0 % 24 < 6 {
///             ClassCaps::unbounded().with_cap(MoveClass::ImportPickup, 10)
///         } else {
///             ClassCaps::unbounded()
///         }
///     }
/// }
/// ```
pub trait SlotPolicy {
    /// Per-class truck caps in force at `hour` (reefer plugs, dangerous-goods
    /// windows, block restrictions, …).
    ///
    /// Default: no caps.
    fn class_caps(&self, _hour: HourStamp) -> ClassCaps {
        ClassCaps::unbounded()
    }

    /// Relative weight of `class` in the round-robin (larger = higher share).
    ///
    /// Default: 1 for every class.  Returned values below 1 are treated as 1
    /// by the allocator.
    fn class_weight(&self, _class: MoveClass) -> u32 {
        1
    }
}

/// A [`SlotPolicy`] with no caps and equal weights.  Use when the per-class
/// split should just be an even round-robin.
pub struct UniformPolicy;

impl SlotPolicy for UniformPolicy {}
