//! No-gate yard occupancy forecast.

use rustc_hash::FxHashMap;

use yg_core::{Horizon, HourStamp, Teu};
use yg_plan::{RailPlans, VesselPlans};

/// Project yard inventory hour by hour assuming zero truck activity.
///
/// A pure additive fold over vessel and rail exchange:
///
/// ```text
/// next = prev + vessel_discharge + rail_in − vessel_load − rail_out
/// ```
///
/// with zero for any missing plan entry.  No clamping and no validation —
/// the series may go negative on inconsistent inputs.  It is a diagnostic
/// reference ("what would the yard do if the gate stayed shut") and is never
/// fed back into steering.
pub fn forecast_yard_no_gate(
    horizon: Horizon,
    initial_yard_teu: Teu,
    vessels: &VesselPlans,
    rails: &RailPlans,
) -> FxHashMap<HourStamp, Teu> {
    let mut forecast = FxHashMap::default();
    forecast.reserve(horizon.len());

    let mut current = initial_yard_teu;
    for hour in horizon.hours() {
        let vessel_net = vessels.get(&hour).map_or(0, |v| v.net_teu());
        let rail_net = rails.get(&hour).map_or(0, |r| r.net_teu());
        current += vessel_net + rail_net;
        forecast.insert(hour, current);
    }
    forecast
}
