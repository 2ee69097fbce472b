//! Running many independent horizons at once.
//!
//! Each [`SlotEngine`] owns its accumulator and reads only immutable input
//! lookups, so runs need no coordination.  With the `parallel` Cargo feature
//! the batch maps onto Rayon's thread pool; without it the same call runs
//! sequentially — results are identical either way.

use yg_alloc::SlotPolicy;

use crate::steer::SlotEngine;
use crate::window::HourWindow;
use crate::SteerResult;

/// Run every engine in the slice and collect per-engine results in order.
///
/// A configuration failure in one engine does not affect the others; each
/// slot of the returned vec carries its own `SteerResult`.
pub fn run_engines<P: SlotPolicy + Sync>(
    engines: &[SlotEngine<'_, P>],
) -> Vec<SteerResult<Vec<HourWindow>>> {
    #[cfg(not(feature = "parallel"))]
    {
        engines.iter().map(SlotEngine::run).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        engines.par_iter().map(SlotEngine::run).collect()
    }
}
