//! Weighted round-robin budget distribution.

use yg_core::MoveClass;

use crate::{ClassAlloc, ClassCaps, SlotPolicy};

/// Distribute `budget` slots across `classes` by weighted round-robin.
///
/// Each outer pass walks `classes` in order; a class with remaining headroom
/// under its cap consumes up to `weight` budget units, one at a time.  A pass
/// ends early when the budget hits zero; the outer loop ends when a full pass
/// allocates nothing (every class is at its cap).  Consequences:
///
/// - the allocated total never exceeds `budget`;
/// - no class ever exceeds its cap;
/// - higher-weight classes receive proportionally more of every round;
/// - budget that cannot be placed (all classes capped) is silently dropped,
///   never force-allocated.
///
/// `budget == 0` or an empty class list returns an all-zero allocation
/// immediately.  The distribution is exactly reproducible for fixed inputs.
pub fn allocate_weighted<P: SlotPolicy + ?Sized>(
    budget:  u32,
    classes: &[MoveClass],
    caps:    &ClassCaps,
    policy:  &P,
) -> ClassAlloc {
    let mut alloc = ClassAlloc::zero();
    if budget == 0 || classes.is_empty() {
        return alloc;
    }

    let mut remaining = budget;
    loop {
        let mut granted_this_pass = 0u32;

        for &class in classes {
            if remaining == 0 {
                break;
            }
            let cap = caps.bound(class);
            // Weights below 1 count as 1 so every listed class stays in the rotation.
            let weight = policy.class_weight(class).max(1);

            let mut granted = 0u32;
            while granted < weight && remaining > 0 && alloc.get(class) < cap {
                alloc.add(class, 1);
                remaining -= 1;
                granted += 1;
            }
            granted_this_pass += granted;
        }

        if remaining == 0 || granted_this_pass == 0 {
            break;
        }
    }

    alloc
}
