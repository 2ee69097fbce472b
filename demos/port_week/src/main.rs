//! port_week — one synthetic week at a small container terminal.
//!
//! Two vessel calls, a daily rail shuttle, day/night gate staffing and a
//! planned maintenance outage feed the steering engine, which publishes
//! hourly appointment slots and writes the full series to CSV.  Swap the
//! embedded plans for real terminal-OS exports to run against live data.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use yg_alloc::{ClassCaps, SlotPolicy};
use yg_core::{Horizon, HourStamp, MoveClass, YardBand};
use yg_engine::{
    compare_vessel_progress, compute_hour_windows, ActualFlow, ActualFlows, SteerConfig,
    VesselWorkWindow,
};
use yg_output::{CsvWriter, ProgressRow, WindowRow, WindowWriter};
use yg_plan::{CapsPlan, OpsCaps, RailPlan, RailPlans, VesselPlan, VesselPlans};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_DAYS:          i64 = 7;
const START_UNIX_SECS:   i64 = 1_700_000_000; // fixed reference Monday 00:00 UTC
const INITIAL_YARD_TEU:  i64 = 600;
const AVG_TEU_PER_TRUCK: f64 = 1.5;
const RESERVE_RHO:       f64 = 0.1;

// Day shift 06:00–21:59, night shift the rest.
const DAY_GATE_TRUCKS:   u32 = 100;
const DAY_YARD_MOVES:    u32 = 300;
const NIGHT_GATE_TRUCKS: u32 = 40;
const NIGHT_YARD_MOVES:  u32 = 120;

// ── Slot policy ───────────────────────────────────────────────────────────────

/// Terminal commercial policy: imports get priority weight, and the reefer
/// stack limits how many loaded export drops the yard can take per hour.
struct TerminalPolicy;

impl SlotPolicy for TerminalPolicy {
    fn class_caps(&self, _hour: HourStamp) -> ClassCaps {
        ClassCaps::unbounded().with_cap(MoveClass::ExportDrop, 40)
    }

    fn class_weight(&self, class: MoveClass) -> u32 {
        match class {
            MoveClass::ImportPickup => 2,
            _ => 1,
        }
    }
}

// ── Plan construction ─────────────────────────────────────────────────────────

fn at(start: HourStamp, day: i64, hour_of_day: i64) -> HourStamp {
    start.offset(day * 24 + hour_of_day)
}

/// Two calls: MSC AURORA works Tuesday, discharge-heavy; EVER FORWARD works
/// Friday, load-heavy.
fn vessel_plans(start: HourStamp) -> VesselPlans {
    let mut plans = VesselPlans::default();

    for h in 0..10 {
        let hour = at(start, 1, 8 + h);
        plans.insert(hour, VesselPlan {
            hour,
            discharge_teu: 120,
            load_teu:      60,
            vessels:       vec!["MSC AURORA".into()],
        });
    }
    for h in 0..12 {
        let hour = at(start, 4, 6 + h);
        plans.insert(hour, VesselPlan {
            hour,
            discharge_teu: 50,
            load_teu:      110,
            vessels:       vec!["EVER FORWARD".into()],
        });
    }
    plans
}

/// One inbound shuttle every morning, one outbound every evening.
fn rail_plans(start: HourStamp) -> RailPlans {
    let mut plans = RailPlans::default();
    for day in 0..SIM_DAYS {
        let morning = at(start, day, 6);
        plans.insert(morning, RailPlan {
            hour:    morning,
            in_teu:  80,
            out_teu: 0,
            trains:  vec![format!("SHUTTLE-IN-{day}")],
        });
        let evening = at(start, day, 18);
        plans.insert(evening, RailPlan {
            hour:    evening,
            in_teu:  0,
            out_teu: 60,
            trains:  vec![format!("SHUTTLE-OUT-{day}")],
        });
    }
    plans
}

/// Day/night staffing, with a crane maintenance outage Thursday 02:00–04:59
/// left out entirely (no caps entry ⇒ no slots published).
fn caps_plan(start: HourStamp) -> CapsPlan {
    let mut caps = CapsPlan::default();
    for day in 0..SIM_DAYS {
        for hour_of_day in 0..24 {
            if day == 3 && (2..5).contains(&hour_of_day) {
                continue;
            }
            let hour = at(start, day, hour_of_day);
            let day_shift = (6..22).contains(&hour_of_day);
            caps.insert(hour, OpsCaps {
                hour,
                gate_trucks_per_hour: if day_shift { DAY_GATE_TRUCKS } else { NIGHT_GATE_TRUCKS },
                yard_moves_per_hour:  if day_shift { DAY_YARD_MOVES } else { NIGHT_YARD_MOVES },
            });
        }
    }
    caps
}

/// Recorded AURORA exchange running ~20% behind the nominal rate.
fn aurora_actuals(start: HourStamp) -> ActualFlows {
    (0..10)
        .map(|h| {
            (at(start, 1, 8 + h), ActualFlow { in_teu: 96, out_teu: 48 })
        })
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== port_week — yardgate steering engine ===");
    println!("Days: {SIM_DAYS}  |  Avg TEU/truck: {AVG_TEU_PER_TRUCK}  |  Reserve: {RESERVE_RHO}");
    println!();

    let start = HourStamp::from_unix_secs(START_UNIX_SECS);
    let horizon = Horizon::new(start, start.offset(SIM_DAYS * 24 - 1));

    // 1. Build the week's plans.
    let vessels = vessel_plans(start);
    let rails = rail_plans(start);
    let caps = caps_plan(start);
    println!(
        "Plans: {} vessel hours, {} rail hours, {} capacity hours (of {})",
        vessels.len(),
        rails.len(),
        caps.len(),
        horizon.len()
    );

    // 2. Steering configuration.
    let config = SteerConfig {
        initial_yard_teu:  INITIAL_YARD_TEU,
        band:              YardBand::new(0, 1_000, 2_000),
        avg_teu_per_truck: AVG_TEU_PER_TRUCK,
        reserve_rho:       RESERVE_RHO,
    };
    println!("Yard band: {}  |  Initial yard: {INITIAL_YARD_TEU} TEU", config.band);
    println!();

    // 3. Run.
    let t0 = Instant::now();
    let windows = compute_hour_windows(horizon, config, &vessels, &rails, &caps, &TerminalPolicy)?;
    let elapsed = t0.elapsed();

    // 4. Vessel progress diagnostic for the AURORA call.
    let aurora_window = VesselWorkWindow {
        vessel:     "MSC AURORA".into(),
        start_work: Some(at(start, 1, 8)),
        end_work:   Some(at(start, 1, 17)),
    };
    let progress = compare_vessel_progress(
        &aurora_window,
        &vessels,
        &aurora_actuals(start),
        120.0,
        60.0,
    );

    // 5. Write everything out.
    std::fs::create_dir_all("output/port_week")?;
    let mut writer = CsvWriter::new(Path::new("output/port_week"))?;
    let window_rows: Vec<WindowRow> = windows.iter().map(WindowRow::from).collect();
    writer.write_windows(&window_rows)?;
    let progress_rows: Vec<ProgressRow> = progress
        .iter()
        .map(|p| ProgressRow::new(&aurora_window.vessel, p))
        .collect();
    writer.write_progress(&progress_rows)?;
    writer.finish()?;

    // 6. Summary.
    println!("Computed {} hour windows in {:.3} ms", windows.len(), elapsed.as_secs_f64() * 1e3);
    println!("  hour_windows.csv    : {} rows", window_rows.len());
    println!("  vessel_progress.csv : {} rows", progress_rows.len());
    println!();

    let published: u64 = windows.iter().map(|w| u64::from(w.total_slots)).sum();
    let dark_hours = windows.iter().filter(|w| w.total_slots == 0).count();
    let final_yard = windows.last().map_or(INITIAL_YARD_TEU, |w| w.yard_teu_projection);
    println!("Slots published this week : {published}");
    println!("Hours with no publication : {dark_hours}");
    println!("Final yard inventory      : {final_yard} TEU (target {})", config.band.target_teu);
    if let Some(p) = progress.last() {
        println!("AURORA end-of-call gap    : {} TEU vs plan", p.difference);
    }
    println!();

    // 7. Tuesday in detail: the AURORA working day.
    println!(
        "{:<6} {:<6} {:<5} {:<5} {:<7} {:<9} {:<9}",
        "Hour", "Total", "In", "Out", "Yard", "NoGate", "Vessel±"
    );
    println!("{}", "-".repeat(52));
    for w in windows.iter().skip(24).take(24) {
        println!(
            "{:<6} {:<6} {:<5} {:<5} {:<7} {:<9} {:<9}",
            (w.hour - start) % 24,
            w.total_slots,
            w.slots_in,
            w.slots_out,
            w.yard_teu_projection,
            w.yard_teu_no_gate,
            w.vessel_discharge_teu - w.vessel_load_teu,
        );
    }

    Ok(())
}
