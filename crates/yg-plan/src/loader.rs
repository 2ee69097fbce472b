//! CSV plan loaders.
//!
//! # CSV formats
//!
//! One row per hour; the `hour` column is the raw [`HourStamp`] value (hours
//! since the Unix epoch).  Name lists are `|`-separated and may be empty.
//!
//! ```csv
//! hour,discharge_teu,load_teu,vessels
//! 481488,120,40,MSC AURIGA|EVER BLOOM
//! 481489,120,40,MSC AURIGA
//! ```
//!
//! ```csv
//! hour,in_teu,out_teu,trains
//! 481488,60,30,SHUTTLE-7
//! ```
//!
//! ```csv
//! hour,gate_trucks_per_hour,yard_moves_per_hour
//! 481488,100,300
//! ```
//!
//! Hours absent from a file are simply absent from the returned lookup; the
//! engine applies its zero-flow / no-capacity defaults.  Duplicate hours are
//! last-writer-wins.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use yg_core::{HourStamp, Teu};

use crate::flows::{CapsPlan, OpsCaps, RailPlan, RailPlans, VesselPlan, VesselPlans};
use crate::PlanError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VesselRecord {
    hour:          i64,
    discharge_teu: Teu,
    load_teu:      Teu,
    #[serde(default)]
    vessels:       String,
}

#[derive(Deserialize)]
struct RailRecord {
    hour:    i64,
    in_teu:  Teu,
    out_teu: Teu,
    #[serde(default)]
    trains:  String,
}

#[derive(Deserialize)]
struct CapsRecord {
    hour:                 i64,
    gate_trucks_per_hour: u32,
    yard_moves_per_hour:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a vessel plan lookup from a CSV file.
pub fn load_vessel_plans_csv(path: &Path) -> Result<VesselPlans, PlanError> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_vessel_plans_reader(file)
}

/// Like [`load_vessel_plans_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_vessel_plans_reader<R: Read>(reader: R) -> Result<VesselPlans, PlanError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut plans = VesselPlans::default();

    for result in csv_reader.deserialize::<VesselRecord>() {
        let row = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let hour = HourStamp(row.hour);
        plans.insert(hour, VesselPlan {
            hour,
            discharge_teu: row.discharge_teu,
            load_teu:      row.load_teu,
            vessels:       split_names(&row.vessels),
        });
    }
    Ok(plans)
}

/// Load a rail plan lookup from a CSV file.
pub fn load_rail_plans_csv(path: &Path) -> Result<RailPlans, PlanError> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_rail_plans_reader(file)
}

/// Like [`load_rail_plans_csv`] but accepts any `Read` source.
pub fn load_rail_plans_reader<R: Read>(reader: R) -> Result<RailPlans, PlanError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut plans = RailPlans::default();

    for result in csv_reader.deserialize::<RailRecord>() {
        let row = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let hour = HourStamp(row.hour);
        plans.insert(hour, RailPlan {
            hour,
            in_teu:  row.in_teu,
            out_teu: row.out_teu,
            trains:  split_names(&row.trains),
        });
    }
    Ok(plans)
}

/// Load a capacity lookup from a CSV file.
pub fn load_caps_csv(path: &Path) -> Result<CapsPlan, PlanError> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_caps_reader(file)
}

/// Like [`load_caps_csv`] but accepts any `Read` source.
pub fn load_caps_reader<R: Read>(reader: R) -> Result<CapsPlan, PlanError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut caps = CapsPlan::default();

    for result in csv_reader.deserialize::<CapsRecord>() {
        let row = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let hour = HourStamp(row.hour);
        caps.insert(hour, OpsCaps {
            hour,
            gate_trucks_per_hour: row.gate_trucks_per_hour,
            yard_moves_per_hour:  row.yard_moves_per_hour,
        });
    }
    Ok(caps)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_names(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .collect()
}
