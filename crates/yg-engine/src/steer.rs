//! The hourly steering loop.
//!
//! # Design
//!
//! One [`SlotEngine`] owns borrowed, immutable inputs for one horizon and
//! folds a single yard-inventory accumulator through a pure per-hour step:
//!
//! 1. Derive the hour's slot budget from the gate/yard capacity bottleneck,
//!    minus the operational reserve.
//! 2. Apply vessel and rail exchange to the tracked yard inventory.
//! 3. Turn the distance to the band target into desired inbound/outbound
//!    truck counts, clamped to a one-hour overcorrection guard and fitted
//!    into the slot budget.
//! 4. Split each direction's count across move classes (weighted round-robin
//!    in `yg-alloc`), advance the accumulator by the truck-driven TEU, and
//!    emit the hour's [`HourWindow`].
//!
//! Missing capacity data for an hour is the engine's only non-error failure
//! mode: the hour is emitted with zero slots and the accumulator untouched.

use yg_alloc::{allocate_weighted, ClassAlloc, SlotPolicy};
use yg_core::{Horizon, HourStamp, MoveClass, Teu};
use yg_plan::{CapsPlan, RailPlans, VesselPlans};

use crate::baseline::forecast_yard_no_gate;
use crate::config::SteerConfig;
use crate::window::HourWindow;
use crate::SteerResult;

// ── SlotEngine ────────────────────────────────────────────────────────────────

/// One steering run: a horizon plus borrowed input lookups.
///
/// All inputs are read-only; the accumulator lives on the stack inside
/// [`run`][Self::run], so separate `SlotEngine`s over the same lookups can
/// execute concurrently without coordination (see [`crate::batch`]).
pub struct SlotEngine<'a, P: SlotPolicy> {
    pub horizon: Horizon,
    pub config:  SteerConfig,
    pub vessels: &'a VesselPlans,
    pub rails:   &'a RailPlans,
    pub caps:    &'a CapsPlan,
    pub policy:  &'a P,
}

impl<'a, P: SlotPolicy> SlotEngine<'a, P> {
    /// Validate the configuration and compute one `HourWindow` per horizon
    /// hour, in chronological order.
    ///
    /// Fails only on the two configuration preconditions; no partial output
    /// is produced on failure.
    pub fn run(&self) -> SteerResult<Vec<HourWindow>> {
        self.config.validate()?;

        // Diagnostic reference series, computed once up front.
        let no_gate = forecast_yard_no_gate(
            self.horizon,
            self.config.initial_yard_teu,
            self.vessels,
            self.rails,
        );

        let mut windows = Vec::with_capacity(self.horizon.len());
        let mut yard_teu = self.config.initial_yard_teu;

        for hour in self.horizon.hours() {
            let no_gate_teu = no_gate[&hour];
            let (window, next_yard) = self.step_hour(hour, yard_teu, no_gate_teu);
            windows.push(window);
            yard_teu = next_yard;
        }

        Ok(windows)
    }

    // ── Per-hour step ─────────────────────────────────────────────────────

    /// Pure step function: current yard inventory in, this hour's window and
    /// the advanced inventory out.
    fn step_hour(
        &self,
        hour:        HourStamp,
        yard_teu:    Teu,
        no_gate_teu: Teu,
    ) -> (HourWindow, Teu) {
        let (vessel_discharge, vessel_load) = self
            .vessels
            .get(&hour)
            .map_or((0, 0), |v| (v.discharge_teu, v.load_teu));
        let (rail_in, rail_out) = self
            .rails
            .get(&hour)
            .map_or((0, 0), |r| (r.in_teu, r.out_teu));

        // ── Phase 0: capacity lookup ──────────────────────────────────────
        //
        // No caps entry means capacity data simply wasn't supplied for this
        // hour: publish nothing and leave the accumulator untouched.  Flow
        // columns still report the plan lookups — they are diagnostics read
        // from immutable inputs, not state.
        let Some(cap) = self.caps.get(&hour) else {
            let window = HourWindow {
                hour,
                total_slots: 0,
                slots_in: 0,
                slots_out: 0,
                class_slots: ClassAlloc::zero(),
                yard_teu_projection: yard_teu,
                yard_teu_no_gate: no_gate_teu,
                truck_in_teu: 0,
                truck_out_teu: 0,
                vessel_discharge_teu: vessel_discharge,
                vessel_load_teu: vessel_load,
                rail_in_teu: rail_in,
                rail_out_teu: rail_out,
            };
            return (window, yard_teu);
        };

        let avg = self.config.avg_teu_per_truck;

        // ── Phase 1: slot budget from the capacity bottleneck ─────────────
        //
        // Yard handling is quoted in moves/hour; convert to truck equivalents
        // and take the tighter of gate and yard.
        let yard_trucks = (cap.yard_moves_per_hour as f64 / avg).floor() as u32;
        let raw_slots = cap.gate_trucks_per_hour.min(yard_trucks);
        let total_slots =
            (((1.0 - self.config.reserve_rho) * raw_slots as f64).floor()).max(0.0) as u32;

        // ── Phase 2: vessel and rail exchange lands first ─────────────────
        let mut yard = yard_teu + vessel_discharge + rail_in - vessel_load - rail_out;

        // ── Phase 3: steering correction ──────────────────────────────────
        //
        // Positive error: yard under target, pull trucks in.  Negative: push
        // out.  The clamp is a one-hour overcorrection guard only — realistic
        // hourly throughput is already bounded by total_slots.  Bounding by
        // the full band maximum is deliberately generous; a per-hour fraction
        // of it (~3%) was probably intended.
        // TODO: tighten the clamp bound once product intent is confirmed.
        let bound = self.config.band.max_teu.max(0); // negative max would invert the clamp
        let diff_teu = (self.config.band.target_teu - yard).clamp(-bound, bound);

        let total = total_slots as i64;
        let mut want_in = if diff_teu > 0 {
            (diff_teu as f64 / avg).round() as i64
        } else {
            0
        };
        let mut want_out = if diff_teu < 0 {
            (-diff_teu as f64 / avg).round() as i64
        } else {
            0
        };

        // Fit the desired counts into the budget, then split whatever is left
        // evenly.  The odd leftover slot is dropped, not assigned.
        want_in = want_in.min(total);
        want_out = want_out.min(total - want_in);
        let spare = (total - want_in - want_out) / 2;
        let want_in = (want_in + spare) as u32;
        let want_out = (want_out + spare) as u32;

        // ── Phase 4: per-class split ──────────────────────────────────────
        let hour_caps = self.policy.class_caps(hour);
        let alloc_in = allocate_weighted(want_in, &MoveClass::INBOUND, &hour_caps, self.policy);
        let alloc_out = allocate_weighted(want_out, &MoveClass::OUTBOUND, &hour_caps, self.policy);
        let class_slots = alloc_in.merged(alloc_out);

        // ── Phase 5: truck-driven advance ─────────────────────────────────
        //
        // Truncated to whole TEU; this is the authoritative state carried
        // into the next hour.
        let truck_in_teu = (want_in as f64 * avg) as Teu;
        let truck_out_teu = (want_out as f64 * avg) as Teu;
        yard += truck_in_teu - truck_out_teu;

        let window = HourWindow {
            hour,
            total_slots,
            slots_in: want_in,
            slots_out: want_out,
            class_slots,
            yard_teu_projection: yard,
            yard_teu_no_gate: no_gate_teu,
            truck_in_teu,
            truck_out_teu,
            vessel_discharge_teu: vessel_discharge,
            vessel_load_teu: vessel_load,
            rail_in_teu: rail_in,
            rail_out_teu: rail_out,
        };
        (window, yard)
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Compute per-hour appointment windows for one horizon.
///
/// Equivalent to building a [`SlotEngine`] and calling
/// [`run`][SlotEngine::run]; see the module docs for the per-hour algorithm.
pub fn compute_hour_windows<P: SlotPolicy>(
    horizon: Horizon,
    config:  SteerConfig,
    vessels: &VesselPlans,
    rails:   &RailPlans,
    caps:    &CapsPlan,
    policy:  &P,
) -> SteerResult<Vec<HourWindow>> {
    SlotEngine { horizon, config, vessels, rails, caps, policy }.run()
}
