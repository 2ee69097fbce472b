//! Truck move classes and gate directions.
//!
//! The class set is closed and small by design: published appointment slots
//! are bucketed into exactly four kinds of truck visit, and each kind has a
//! fixed effect on yard inventory (drops add TEU, pickups remove it).

use std::fmt;
use std::str::FromStr;

use crate::{YgError, YgResult};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Net effect of a truck visit on yard inventory.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Containers enter the yard (drop-offs).
    Inbound,
    /// Containers leave the yard (pickups).
    Outbound,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Inbound  => "in",
            Direction::Outbound => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── MoveClass ─────────────────────────────────────────────────────────────────

/// Category of truck visit behind a published slot.
///
/// The discriminants double as indexes into dense per-class arrays
/// (see `yg-alloc`), so the declaration order is load-bearing: it is also the
/// round-robin iteration order of the allocator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MoveClass {
    /// Pick up a full import container.
    ImportPickup = 0,
    /// Drop off a full export container.
    ExportDrop = 1,
    /// Pick up an empty.
    EmptyPickup = 2,
    /// Drop off an empty.
    EmptyDrop = 3,
}

impl MoveClass {
    /// Number of move classes (array sizing).
    pub const COUNT: usize = 4;

    /// All classes, in declaration order.
    pub const ALL: [MoveClass; 4] = [
        MoveClass::ImportPickup,
        MoveClass::ExportDrop,
        MoveClass::EmptyPickup,
        MoveClass::EmptyDrop,
    ];

    /// Classes that bring containers into the yard.
    pub const INBOUND: [MoveClass; 2] = [MoveClass::ExportDrop, MoveClass::EmptyDrop];

    /// Classes that take containers out of the yard.
    pub const OUTBOUND: [MoveClass; 2] = [MoveClass::ImportPickup, MoveClass::EmptyPickup];

    /// Cast to `usize` for direct use as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Which way this visit moves inventory.
    pub fn direction(self) -> Direction {
        match self {
            MoveClass::ExportDrop | MoveClass::EmptyDrop     => Direction::Inbound,
            MoveClass::ImportPickup | MoveClass::EmptyPickup => Direction::Outbound,
        }
    }

    /// Stable kebab-case label, used in CSV columns and config files.
    pub fn label(self) -> &'static str {
        match self {
            MoveClass::ImportPickup => "import-pickup",
            MoveClass::ExportDrop   => "export-drop",
            MoveClass::EmptyPickup  => "empty-pickup",
            MoveClass::EmptyDrop    => "empty-drop",
        }
    }
}

impl fmt::Display for MoveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MoveClass {
    type Err = YgError;

    fn from_str(s: &str) -> YgResult<Self> {
        match s.trim() {
            "import-pickup" => Ok(MoveClass::ImportPickup),
            "export-drop"   => Ok(MoveClass::ExportDrop),
            "empty-pickup"  => Ok(MoveClass::EmptyPickup),
            "empty-drop"    => Ok(MoveClass::EmptyDrop),
            other => Err(YgError::Parse(format!(
                "invalid move class {other:?}: expected one of \
                 import-pickup, export-drop, empty-pickup, empty-drop"
            ))),
        }
    }
}
