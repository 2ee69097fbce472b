//! Capacity gap-filling.
//!
//! The engine treats an hour missing from the caps lookup as "publish
//! nothing" — that is its contract and it never guesses capacity on its own.
//! Upstream planning data, however, often arrives with holes (shift handover
//! hours, export glitches), and operators usually want those bridged rather
//! than blacked out.  [`fill_missing_caps`] is that bridge, run explicitly by
//! the caller before invoking the engine:
//!
//! - a gap between two populated hours is filled by linear interpolation
//!   (rounded to the nearest integer);
//! - a gap with a populated hour on only one side copies that neighbour;
//! - a lookup with no populated hour at all inside the horizon fills with
//!   zero capacity.

use yg_core::{Horizon, HourStamp};

use crate::flows::{CapsPlan, OpsCaps};

/// Return a copy of `caps` with every hour of `horizon` populated.
///
/// Hours outside `horizon` are carried over untouched but are not consulted
/// when searching for neighbours — interpolation only sees the horizon.
pub fn fill_missing_caps(caps: &CapsPlan, horizon: Horizon) -> CapsPlan {
    let mut filled = caps.clone();

    for t in horizon.hours() {
        if filled.contains_key(&t) {
            continue;
        }

        let prev = search_back(&filled, t, horizon.start);
        let next = search_forward(&filled, t, horizon.end);

        let entry = match (prev, next) {
            (Some(p), Some(n)) => {
                let span  = (n.hour - p.hour) as f64;
                let along = (t - p.hour) as f64;
                let factor = along / span;
                OpsCaps {
                    hour: t,
                    gate_trucks_per_hour: lerp_round(
                        p.gate_trucks_per_hour, n.gate_trucks_per_hour, factor,
                    ),
                    yard_moves_per_hour: lerp_round(
                        p.yard_moves_per_hour, n.yard_moves_per_hour, factor,
                    ),
                }
            }
            (Some(p), None) => OpsCaps { hour: t, ..p },
            (None, Some(n)) => OpsCaps { hour: t, ..n },
            (None, None) => OpsCaps {
                hour: t,
                gate_trucks_per_hour: 0,
                yard_moves_per_hour:  0,
            },
        };
        filled.insert(t, entry);
    }

    filled
}

// Neighbour searches run over the partially filled map, so after the first
// hour of a gap is filled, later hours in the same gap see it as their
// previous neighbour.  The fill stays on the same straight line either way.

fn search_back(filled: &CapsPlan, from: HourStamp, start: HourStamp) -> Option<OpsCaps> {
    let mut t = from.offset(-1);
    while t >= start {
        if let Some(cap) = filled.get(&t) {
            return Some(*cap);
        }
        t = t.offset(-1);
    }
    None
}

fn search_forward(filled: &CapsPlan, from: HourStamp, end: HourStamp) -> Option<OpsCaps> {
    let mut t = from.next();
    while t <= end {
        if let Some(cap) = filled.get(&t) {
            return Some(*cap);
        }
        t = t.next();
    }
    None
}

fn lerp_round(a: u32, b: u32, factor: f64) -> u32 {
    (a as f64 + (b as f64 - a as f64) * factor).round() as u32
}
