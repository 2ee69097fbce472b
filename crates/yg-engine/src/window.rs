//! The per-hour output record.

use yg_alloc::ClassAlloc;
use yg_core::{HourStamp, Teu};

/// Everything the engine publishes for one hour.
///
/// Emitted in chronological order, one per horizon hour, including hours with
/// no capacity data (those carry all-zero slot fields rather than being
/// skipped, so consumers always see a gap-free series).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourWindow {
    pub hour: HourStamp,

    /// Slots published this hour after the bottleneck and reserve cuts.
    pub total_slots: u32,
    /// Slot budget given to inbound (drop-off) traffic.
    pub slots_in:    u32,
    /// Slot budget given to outbound (pickup) traffic.
    pub slots_out:   u32,
    /// Per-class allocation within the two direction budgets.  Per-class
    /// totals may fall short of `slots_in`/`slots_out` when classes are
    /// capped.
    pub class_slots: ClassAlloc,

    /// Tracked yard inventory after this hour's flows and truck effect.
    pub yard_teu_projection: Teu,
    /// The diagnostic no-gate forecast for this hour (vessel + rail only).
    pub yard_teu_no_gate:    Teu,

    /// TEU moved into the yard by allocated inbound trucks.
    pub truck_in_teu:  Teu,
    /// TEU moved out of the yard by allocated outbound trucks.
    pub truck_out_teu: Teu,

    /// Planned vessel discharge this hour (zero when no plan entry).
    pub vessel_discharge_teu: Teu,
    /// Planned vessel load this hour.
    pub vessel_load_teu:      Teu,
    /// Planned rail arrivals this hour.
    pub rail_in_teu:          Teu,
    /// Planned rail departures this hour.
    pub rail_out_teu:         Teu,
}
