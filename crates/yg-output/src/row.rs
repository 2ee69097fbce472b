//! Plain data row types written by output backends.
//!
//! Rows flatten the engine's structured records into one column per field so
//! every backend writes the same schema.

use yg_core::{MoveClass, Teu};
use yg_engine::{HourWindow, VesselProgressPoint};

/// One published hour, flattened: direction budgets plus one column per move
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRow {
    pub hour: i64,

    pub total_slots: u32,
    pub slots_in:    u32,
    pub slots_out:   u32,

    pub import_pickup_slots: u32,
    pub export_drop_slots:   u32,
    pub empty_pickup_slots:  u32,
    pub empty_drop_slots:    u32,

    pub yard_teu_projection: Teu,
    pub yard_teu_no_gate:    Teu,

    pub truck_in_teu:  Teu,
    pub truck_out_teu: Teu,

    pub vessel_discharge_teu: Teu,
    pub vessel_load_teu:      Teu,
    pub rail_in_teu:          Teu,
    pub rail_out_teu:         Teu,
}

impl WindowRow {
    /// Column names, in the order the fields serialize.
    pub const HEADER: [&'static str; 16] = [
        "hour",
        "total_slots",
        "slots_in",
        "slots_out",
        "import_pickup_slots",
        "export_drop_slots",
        "empty_pickup_slots",
        "empty_drop_slots",
        "yard_teu_projection",
        "yard_teu_no_gate",
        "truck_in_teu",
        "truck_out_teu",
        "vessel_discharge_teu",
        "vessel_load_teu",
        "rail_in_teu",
        "rail_out_teu",
    ];
}

impl From<&HourWindow> for WindowRow {
    fn from(w: &HourWindow) -> Self {
        Self {
            hour:                 w.hour.0,
            total_slots:          w.total_slots,
            slots_in:             w.slots_in,
            slots_out:            w.slots_out,
            import_pickup_slots:  w.class_slots.get(MoveClass::ImportPickup),
            export_drop_slots:    w.class_slots.get(MoveClass::ExportDrop),
            empty_pickup_slots:   w.class_slots.get(MoveClass::EmptyPickup),
            empty_drop_slots:     w.class_slots.get(MoveClass::EmptyDrop),
            yard_teu_projection:  w.yard_teu_projection,
            yard_teu_no_gate:     w.yard_teu_no_gate,
            truck_in_teu:         w.truck_in_teu,
            truck_out_teu:        w.truck_out_teu,
            vessel_discharge_teu: w.vessel_discharge_teu,
            vessel_load_teu:      w.vessel_load_teu,
            rail_in_teu:          w.rail_in_teu,
            rail_out_teu:         w.rail_out_teu,
        }
    }
}

/// One hour of a vessel's planned-vs-actual comparison series, tagged with
/// the vessel name so series for many calls share one table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    pub vessel: String,
    pub hour:   i64,

    pub simulated_discharge_rate: f64,
    pub simulated_load_rate:      f64,
    pub real_discharge_rate:      f64,
    pub real_load_rate:           f64,

    pub cumulative_simulated_teu: Teu,
    pub cumulative_real_teu:      Teu,
    pub difference:               Teu,
}

impl ProgressRow {
    pub const HEADER: [&'static str; 9] = [
        "vessel",
        "hour",
        "simulated_discharge_rate",
        "simulated_load_rate",
        "real_discharge_rate",
        "real_load_rate",
        "cumulative_simulated_teu",
        "cumulative_real_teu",
        "difference",
    ];

    pub fn new(vessel: &str, point: &VesselProgressPoint) -> Self {
        Self {
            vessel:                   vessel.to_string(),
            hour:                     point.hour.0,
            simulated_discharge_rate: point.simulated_discharge_rate,
            simulated_load_rate:      point.simulated_load_rate,
            real_discharge_rate:      point.real_discharge_rate,
            real_load_rate:           point.real_load_rate,
            cumulative_simulated_teu: point.cumulative_simulated_teu,
            cumulative_real_teu:      point.cumulative_real_teu,
            difference:               point.difference,
        }
    }
}
