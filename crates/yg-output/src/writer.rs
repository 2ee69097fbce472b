//! The `WindowWriter` trait implemented by all backend writers.

use crate::{OutputResult, ProgressRow, WindowRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait WindowWriter {
    /// Write a batch of hour-window rows.
    fn write_windows(&mut self, rows: &[WindowRow]) -> OutputResult<()>;

    /// Write a batch of vessel-progress rows.
    fn write_progress(&mut self, rows: &[ProgressRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
