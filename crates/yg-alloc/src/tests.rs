//! Unit tests for yg-alloc.

use yg_core::{HourStamp, MoveClass};

use crate::{allocate_weighted, ClassAlloc, ClassCaps, SlotPolicy, UniformPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Policy with fixed per-class weights (import, export, empty-pickup, empty-drop).
struct Weights([u32; MoveClass::COUNT]);

impl SlotPolicy for Weights {
    fn class_weight(&self, class: MoveClass) -> u32 {
        self.0[class.index()]
    }
}

fn counts(alloc: ClassAlloc) -> [u32; MoveClass::COUNT] {
    let mut out = [0; MoveClass::COUNT];
    for (c, n) in alloc.iter() {
        out[c.index()] = n;
    }
    out
}

// ── ClassCaps / ClassAlloc ────────────────────────────────────────────────────

#[cfg(test)]
mod tables {
    use yg_core::Direction;

    use super::*;

    #[test]
    fn unbounded_caps() {
        let caps = ClassCaps::unbounded();
        for c in MoveClass::ALL {
            assert_eq!(caps.get(c), None);
            assert_eq!(caps.bound(c), u32::MAX);
        }
    }

    #[test]
    fn with_cap_sets_one_class() {
        let caps = ClassCaps::unbounded().with_cap(MoveClass::ImportPickup, 5);
        assert_eq!(caps.get(MoveClass::ImportPickup), Some(5));
        assert_eq!(caps.get(MoveClass::ExportDrop), None);
    }

    #[test]
    fn direction_totals() {
        let caps = ClassCaps::unbounded();
        let alloc = allocate_weighted(10, &MoveClass::INBOUND, &caps, &UniformPolicy);
        assert_eq!(alloc.direction_total(Direction::Inbound), 10);
        assert_eq!(alloc.direction_total(Direction::Outbound), 0);
    }

    #[test]
    fn merged_adds_per_class() {
        let caps = ClassCaps::unbounded();
        let a = allocate_weighted(4, &MoveClass::INBOUND, &caps, &UniformPolicy);
        let b = allocate_weighted(6, &MoveClass::OUTBOUND, &caps, &UniformPolicy);
        let merged = a.merged(b);
        assert_eq!(merged.total(), 10);
        assert_eq!(merged.get(MoveClass::ExportDrop), a.get(MoveClass::ExportDrop));
        assert_eq!(merged.get(MoveClass::ImportPickup), b.get(MoveClass::ImportPickup));
    }
}

// ── Weighted round-robin ──────────────────────────────────────────────────────

#[cfg(test)]
mod round_robin {
    use super::*;

    #[test]
    fn zero_budget_allocates_nothing() {
        let alloc = allocate_weighted(0, &MoveClass::ALL, &ClassCaps::unbounded(), &UniformPolicy);
        assert_eq!(alloc, ClassAlloc::zero());
    }

    #[test]
    fn empty_class_list_allocates_nothing() {
        let alloc = allocate_weighted(10, &[], &ClassCaps::unbounded(), &UniformPolicy);
        assert_eq!(alloc, ClassAlloc::zero());
    }

    #[test]
    fn equal_weights_split_evenly() {
        let alloc = allocate_weighted(8, &MoveClass::ALL, &ClassCaps::unbounded(), &UniformPolicy);
        assert_eq!(counts(alloc), [2, 2, 2, 2]);
    }

    #[test]
    fn uneven_budget_favours_earlier_classes() {
        // 2 full passes of 4 + 2 units for the first two classes in order.
        let alloc = allocate_weighted(10, &MoveClass::ALL, &ClassCaps::unbounded(), &UniformPolicy);
        assert_eq!(counts(alloc), [3, 3, 2, 2]);
        assert_eq!(alloc.total(), 10);
    }

    #[test]
    fn weights_skew_proportionally() {
        // import weight 3, export weight 1; only those two classes listed.
        let policy = Weights([3, 1, 1, 1]);
        let classes = [MoveClass::ImportPickup, MoveClass::ExportDrop];
        let alloc = allocate_weighted(12, &classes, &ClassCaps::unbounded(), &policy);
        assert_eq!(alloc.get(MoveClass::ImportPickup), 9);
        assert_eq!(alloc.get(MoveClass::ExportDrop), 3);
    }

    #[test]
    fn zero_weight_treated_as_one() {
        let policy = Weights([0, 1, 1, 1]);
        let alloc = allocate_weighted(4, &MoveClass::ALL, &ClassCaps::unbounded(), &policy);
        // Every class stays in the rotation with at least weight 1.
        assert_eq!(counts(alloc), [1, 1, 1, 1]);
    }

    #[test]
    fn caps_respected() {
        let caps = ClassCaps::unbounded()
            .with_cap(MoveClass::ImportPickup, 2)
            .with_cap(MoveClass::EmptyPickup, 1);
        let alloc = allocate_weighted(20, &MoveClass::OUTBOUND, &caps, &UniformPolicy);
        assert_eq!(alloc.get(MoveClass::ImportPickup), 2);
        assert_eq!(alloc.get(MoveClass::EmptyPickup), 1);
        // Remainder is dropped, not forced past the caps.
        assert_eq!(alloc.total(), 3);
    }

    #[test]
    fn capped_class_overflows_to_uncapped() {
        let caps = ClassCaps::unbounded().with_cap(MoveClass::ExportDrop, 3);
        let alloc = allocate_weighted(10, &MoveClass::INBOUND, &caps, &UniformPolicy);
        assert_eq!(alloc.get(MoveClass::ExportDrop), 3);
        assert_eq!(alloc.get(MoveClass::EmptyDrop), 7);
    }

    #[test]
    fn never_exceeds_budget() {
        for budget in 0..30 {
            let alloc =
                allocate_weighted(budget, &MoveClass::ALL, &ClassCaps::unbounded(), &UniformPolicy);
            assert_eq!(alloc.total(), budget);
        }
    }

    #[test]
    fn deterministic() {
        let policy = Weights([2, 5, 1, 3]);
        let caps = ClassCaps::unbounded().with_cap(MoveClass::ExportDrop, 9);
        let a = allocate_weighted(23, &MoveClass::ALL, &caps, &policy);
        let b = allocate_weighted(23, &MoveClass::ALL, &caps, &policy);
        assert_eq!(a, b);
    }

    #[test]
    fn all_capped_at_zero_terminates() {
        let caps = ClassCaps::unbounded()
            .with_cap(MoveClass::ExportDrop, 0)
            .with_cap(MoveClass::EmptyDrop, 0);
        let alloc = allocate_weighted(10, &MoveClass::INBOUND, &caps, &UniformPolicy);
        assert_eq!(alloc, ClassAlloc::zero());
    }

    #[test]
    fn default_policy_hooks() {
        // UniformPolicy: unbounded caps at any hour, weight 1 everywhere.
        assert_eq!(UniformPolicy.class_caps(HourStamp(99)), ClassCaps::unbounded());
        for c in MoveClass::ALL {
            assert_eq!(UniformPolicy.class_weight(c), 1);
        }
    }
}
