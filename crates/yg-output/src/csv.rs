//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `hour_windows.csv`
//! - `vessel_progress.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::WindowWriter;
use crate::{OutputResult, ProgressRow, WindowRow};

/// Writes engine results to two CSV files.
pub struct CsvWriter {
    windows:  Writer<File>,
    progress: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut windows = Writer::from_path(dir.join("hour_windows.csv"))?;
        windows.write_record(WindowRow::HEADER)?;

        let mut progress = Writer::from_path(dir.join("vessel_progress.csv"))?;
        progress.write_record(ProgressRow::HEADER)?;

        Ok(Self { windows, progress, finished: false })
    }
}

impl WindowWriter for CsvWriter {
    fn write_windows(&mut self, rows: &[WindowRow]) -> OutputResult<()> {
        for row in rows {
            self.windows.write_record(&[
                row.hour.to_string(),
                row.total_slots.to_string(),
                row.slots_in.to_string(),
                row.slots_out.to_string(),
                row.import_pickup_slots.to_string(),
                row.export_drop_slots.to_string(),
                row.empty_pickup_slots.to_string(),
                row.empty_drop_slots.to_string(),
                row.yard_teu_projection.to_string(),
                row.yard_teu_no_gate.to_string(),
                row.truck_in_teu.to_string(),
                row.truck_out_teu.to_string(),
                row.vessel_discharge_teu.to_string(),
                row.vessel_load_teu.to_string(),
                row.rail_in_teu.to_string(),
                row.rail_out_teu.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_progress(&mut self, rows: &[ProgressRow]) -> OutputResult<()> {
        for row in rows {
            self.progress.write_record(&[
                row.vessel.clone(),
                row.hour.to_string(),
                row.simulated_discharge_rate.to_string(),
                row.simulated_load_rate.to_string(),
                row.real_discharge_rate.to_string(),
                row.real_load_rate.to_string(),
                row.cumulative_simulated_teu.to_string(),
                row.cumulative_real_teu.to_string(),
                row.difference.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.windows.flush()?;
        self.progress.flush()?;
        Ok(())
    }
}
