//! Planned-vs-actual vessel work-rate comparison.
//!
//! A diagnostic series for one vessel call: how fast the terminal *should* be
//! working the vessel (planned exchange totals drawn down at nominal
//! discharge/load rates across the work window) against how fast it actually
//! is (recorded hourly flows).  Operations uses the widening gap to spot
//! calls falling behind before the scheduled completion slips.
//!
//! The simulated period runs from one day before work start to one day after
//! work end, so the flat lead-in/lead-out frames the working burst.

use rustc_hash::FxHashMap;

use yg_core::{Horizon, HourStamp, Teu};
use yg_plan::VesselPlans;

/// Hours of flat context added on each side of the work window.
const WORK_WINDOW_BUFFER_HOURS: i64 = 24;

// ── Input types ───────────────────────────────────────────────────────────────

/// A vessel call's scheduled working period.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselWorkWindow {
    pub vessel:     String,
    /// First working hour; `None` while the call is unscheduled.
    pub start_work: Option<HourStamp>,
    /// Last working hour (inclusive).
    pub end_work:   Option<HourStamp>,
}

/// Recorded vessel exchange for one hour.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActualFlow {
    /// TEU actually discharged this hour.
    pub in_teu:  Teu,
    /// TEU actually loaded this hour.
    pub out_teu: Teu,
}

/// Hour → recorded exchange.  Absent hour ⇒ nothing recorded.
pub type ActualFlows = FxHashMap<HourStamp, ActualFlow>;

// ── Output type ───────────────────────────────────────────────────────────────

/// One hour of the comparison series.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselProgressPoint {
    pub hour: HourStamp,

    /// Nominal TEU/h the plan would discharge this hour (0 outside work).
    pub simulated_discharge_rate: f64,
    /// Nominal TEU/h the plan would load this hour.
    pub simulated_load_rate:      f64,
    /// Recorded discharge TEU/h.
    pub real_discharge_rate:      f64,
    /// Recorded load TEU/h.
    pub real_load_rate:           f64,

    /// Running total of simulated exchange (discharge + load).
    pub cumulative_simulated_teu: Teu,
    /// Running total of recorded exchange.
    pub cumulative_real_teu:      Teu,
    /// `cumulative_real_teu − cumulative_simulated_teu`: negative while the
    /// call runs behind plan.
    pub difference:               Teu,
}

// ── Comparison ────────────────────────────────────────────────────────────────

/// Build the hourly comparison series for one vessel call.
///
/// Returns an empty vec when the vessel name is empty or the work window is
/// unscheduled.  Planned totals are the summed exchange of every plan hour
/// naming this vessel; they are drawn down at `discharge_rate`/`load_rate`
/// TEU per working hour until exhausted.
pub fn compare_vessel_progress(
    window:         &VesselWorkWindow,
    vessels:        &VesselPlans,
    actual_flows:   &ActualFlows,
    discharge_rate: f64,
    load_rate:      f64,
) -> Vec<VesselProgressPoint> {
    if window.vessel.is_empty() {
        return vec![];
    }
    let (Some(start_work), Some(end_work)) = (window.start_work, window.end_work) else {
        return vec![];
    };

    // Planned exchange attributed to this vessel.
    let mut remaining_discharge = 0.0_f64;
    let mut remaining_load = 0.0_f64;
    for plan in vessels.values() {
        if plan.vessels.iter().any(|name| name == &window.vessel) {
            remaining_discharge += plan.discharge_teu as f64;
            remaining_load += plan.load_teu as f64;
        }
    }

    let horizon = Horizon::new(
        start_work.offset(-WORK_WINDOW_BUFFER_HOURS),
        end_work.offset(WORK_WINDOW_BUFFER_HOURS),
    );

    let mut points = Vec::with_capacity(horizon.len());
    let mut cumulative_simulated = 0.0_f64;
    let mut cumulative_real: Teu = 0;

    for hour in horizon.hours() {
        let working = start_work <= hour && hour <= end_work;
        let (sim_discharge, sim_load) = if working {
            let d = discharge_rate.max(0.0).min(remaining_discharge);
            let l = load_rate.max(0.0).min(remaining_load);
            remaining_discharge -= d;
            remaining_load -= l;
            (d, l)
        } else {
            (0.0, 0.0)
        };
        cumulative_simulated += sim_discharge + sim_load;

        let flow = actual_flows.get(&hour).copied().unwrap_or_default();
        cumulative_real += flow.in_teu + flow.out_teu;

        let cumulative_simulated_teu = cumulative_simulated.round() as Teu;
        points.push(VesselProgressPoint {
            hour,
            simulated_discharge_rate: sim_discharge,
            simulated_load_rate:      sim_load,
            real_discharge_rate:      flow.in_teu as f64,
            real_load_rate:           flow.out_teu as f64,
            cumulative_simulated_teu,
            cumulative_real_teu:      cumulative_real,
            difference:               cumulative_real - cumulative_simulated_teu,
        });
    }

    points
}
