//! Unit tests for yg-plan.

use yg_core::{Horizon, HourStamp};

use crate::flows::{CapsPlan, OpsCaps};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cap(hour: i64, gate: u32, yard: u32) -> OpsCaps {
    OpsCaps {
        hour: HourStamp(hour),
        gate_trucks_per_hour: gate,
        yard_moves_per_hour:  yard,
    }
}

fn caps_of(entries: &[OpsCaps]) -> CapsPlan {
    entries.iter().map(|c| (c.hour, *c)).collect()
}

// ── Flow types ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flows {
    use yg_core::HourStamp;

    use crate::flows::{RailPlan, VesselPlan};

    #[test]
    fn net_teu() {
        let mut v = VesselPlan::zero(HourStamp(0));
        v.discharge_teu = 120;
        v.load_teu = 40;
        assert_eq!(v.net_teu(), 80);

        let mut r = RailPlan::zero(HourStamp(0));
        r.in_teu = 10;
        r.out_teu = 35;
        assert_eq!(r.net_teu(), -25);
    }

    #[test]
    fn zero_plans_are_empty() {
        let v = VesselPlan::zero(HourStamp(7));
        assert_eq!(v.hour, HourStamp(7));
        assert_eq!(v.net_teu(), 0);
        assert!(v.vessels.is_empty());
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use yg_core::HourStamp;

    use crate::{load_caps_reader, load_rail_plans_reader, load_vessel_plans_reader};

    const VESSEL_CSV: &[u8] = b"\
hour,discharge_teu,load_teu,vessels\n\
100,120,40,MSC AURIGA|EVER BLOOM\n\
101,80,60,MSC AURIGA\n\
103,0,0,\n\
";

    const RAIL_CSV: &[u8] = b"\
hour,in_teu,out_teu,trains\n\
100,60,30,SHUTTLE-7\n\
102,0,45,SHUTTLE-7|SHUTTLE-8\n\
";

    const CAPS_CSV: &[u8] = b"\
hour,gate_trucks_per_hour,yard_moves_per_hour\n\
100,100,300\n\
101,80,240\n\
";

    #[test]
    fn vessel_plans_load() {
        let plans = load_vessel_plans_reader(Cursor::new(VESSEL_CSV)).unwrap();
        assert_eq!(plans.len(), 3);

        let p = &plans[&HourStamp(100)];
        assert_eq!(p.discharge_teu, 120);
        assert_eq!(p.load_teu, 40);
        assert_eq!(p.vessels, vec!["MSC AURIGA", "EVER BLOOM"]);

        // Empty name list parses to an empty vec, not [""]
        assert!(plans[&HourStamp(103)].vessels.is_empty());
        // Hour 102 absent from the file stays absent from the lookup.
        assert!(!plans.contains_key(&HourStamp(102)));
    }

    #[test]
    fn rail_plans_load() {
        let plans = load_rail_plans_reader(Cursor::new(RAIL_CSV)).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[&HourStamp(102)].out_teu, 45);
        assert_eq!(plans[&HourStamp(102)].trains.len(), 2);
    }

    #[test]
    fn caps_load() {
        let caps = load_caps_reader(Cursor::new(CAPS_CSV)).unwrap();
        assert_eq!(caps.len(), 2);
        assert_eq!(caps[&HourStamp(100)].gate_trucks_per_hour, 100);
        assert_eq!(caps[&HourStamp(101)].yard_moves_per_hour, 240);
    }

    #[test]
    fn duplicate_hour_last_writer_wins() {
        let csv = b"\
hour,gate_trucks_per_hour,yard_moves_per_hour\n\
100,100,300\n\
100,50,150\n\
";
        let caps = load_caps_reader(Cursor::new(csv.as_slice())).unwrap();
        assert_eq!(caps[&HourStamp(100)].gate_trucks_per_hour, 50);
    }

    #[test]
    fn malformed_row_errors() {
        let bad = b"\
hour,gate_trucks_per_hour,yard_moves_per_hour\n\
100,not_a_number,300\n\
";
        assert!(load_caps_reader(Cursor::new(bad.as_slice())).is_err());
    }
}

// ── Gap-filling ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod interpolate {
    use super::*;
    use crate::fill_missing_caps;

    fn hz(start: i64, end: i64) -> Horizon {
        Horizon::new(HourStamp(start), HourStamp(end))
    }

    #[test]
    fn existing_entries_untouched() {
        let caps = caps_of(&[cap(0, 100, 300), cap(2, 100, 300)]);
        let filled = fill_missing_caps(&caps, hz(0, 2));
        assert_eq!(filled[&HourStamp(0)], cap(0, 100, 300));
        assert_eq!(filled[&HourStamp(2)], cap(2, 100, 300));
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let caps = caps_of(&[cap(0, 100, 300), cap(2, 200, 100)]);
        let filled = fill_missing_caps(&caps, hz(0, 2));
        let mid = filled[&HourStamp(1)];
        assert_eq!(mid.gate_trucks_per_hour, 150);
        assert_eq!(mid.yard_moves_per_hour, 200);
    }

    #[test]
    fn long_gap_stays_on_the_line() {
        let caps = caps_of(&[cap(0, 0, 0), cap(4, 400, 40)]);
        let filled = fill_missing_caps(&caps, hz(0, 4));
        for t in 1..4 {
            let c = filled[&HourStamp(t)];
            assert_eq!(c.gate_trucks_per_hour, (t as u32) * 100);
            assert_eq!(c.yard_moves_per_hour, (t as u32) * 10);
        }
    }

    #[test]
    fn leading_gap_copies_next() {
        let caps = caps_of(&[cap(3, 80, 240)]);
        let filled = fill_missing_caps(&caps, hz(0, 3));
        for t in 0..3 {
            assert_eq!(filled[&HourStamp(t)].gate_trucks_per_hour, 80);
        }
    }

    #[test]
    fn trailing_gap_copies_previous() {
        let caps = caps_of(&[cap(0, 80, 240)]);
        let filled = fill_missing_caps(&caps, hz(0, 3));
        for t in 1..=3 {
            assert_eq!(filled[&HourStamp(t)].yard_moves_per_hour, 240);
        }
    }

    #[test]
    fn empty_lookup_fills_zero() {
        let filled = fill_missing_caps(&CapsPlan::default(), hz(0, 2));
        for t in 0..=2 {
            let c = filled[&HourStamp(t)];
            assert_eq!(c.gate_trucks_per_hour, 0);
            assert_eq!(c.yard_moves_per_hour, 0);
        }
    }

    #[test]
    fn entries_outside_horizon_not_consulted() {
        // A populated hour before the horizon must not leak in as a neighbour.
        let caps = caps_of(&[cap(-5, 999, 999), cap(2, 80, 240)]);
        let filled = fill_missing_caps(&caps, hz(0, 2));
        assert_eq!(filled[&HourStamp(0)].gate_trucks_per_hour, 80);
        assert_eq!(filled[&HourStamp(1)].gate_trucks_per_hour, 80);
    }
}
