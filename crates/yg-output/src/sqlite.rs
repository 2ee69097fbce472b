//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `slots.db` file in the configured output directory with
//! two tables: `hour_windows` and `vessel_progress`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::WindowWriter;
use crate::{OutputResult, ProgressRow, WindowRow};

/// Writes engine results to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `slots.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("slots.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS hour_windows (
                 hour                 INTEGER PRIMARY KEY,
                 total_slots          INTEGER NOT NULL,
                 slots_in             INTEGER NOT NULL,
                 slots_out            INTEGER NOT NULL,
                 import_pickup_slots  INTEGER NOT NULL,
                 export_drop_slots    INTEGER NOT NULL,
                 empty_pickup_slots   INTEGER NOT NULL,
                 empty_drop_slots     INTEGER NOT NULL,
                 yard_teu_projection  INTEGER NOT NULL,
                 yard_teu_no_gate     INTEGER NOT NULL,
                 truck_in_teu         INTEGER NOT NULL,
                 truck_out_teu        INTEGER NOT NULL,
                 vessel_discharge_teu INTEGER NOT NULL,
                 vessel_load_teu      INTEGER NOT NULL,
                 rail_in_teu          INTEGER NOT NULL,
                 rail_out_teu         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS vessel_progress (
                 vessel                   TEXT    NOT NULL,
                 hour                     INTEGER NOT NULL,
                 simulated_discharge_rate REAL    NOT NULL,
                 simulated_load_rate      REAL    NOT NULL,
                 real_discharge_rate      REAL    NOT NULL,
                 real_load_rate           REAL    NOT NULL,
                 cumulative_simulated_teu INTEGER NOT NULL,
                 cumulative_real_teu      INTEGER NOT NULL,
                 difference               INTEGER NOT NULL,
                 PRIMARY KEY (vessel, hour)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl WindowWriter for SqliteWriter {
    fn write_windows(&mut self, rows: &[WindowRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO hour_windows \
                 (hour, total_slots, slots_in, slots_out, \
                  import_pickup_slots, export_drop_slots, \
                  empty_pickup_slots, empty_drop_slots, \
                  yard_teu_projection, yard_teu_no_gate, \
                  truck_in_teu, truck_out_teu, \
                  vessel_discharge_teu, vessel_load_teu, \
                  rail_in_teu, rail_out_teu) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, \
                         ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.hour,
                    row.total_slots,
                    row.slots_in,
                    row.slots_out,
                    row.import_pickup_slots,
                    row.export_drop_slots,
                    row.empty_pickup_slots,
                    row.empty_drop_slots,
                    row.yard_teu_projection,
                    row.yard_teu_no_gate,
                    row.truck_in_teu,
                    row.truck_out_teu,
                    row.vessel_discharge_teu,
                    row.vessel_load_teu,
                    row.rail_in_teu,
                    row.rail_out_teu,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_progress(&mut self, rows: &[ProgressRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO vessel_progress \
                 (vessel, hour, simulated_discharge_rate, simulated_load_rate, \
                  real_discharge_rate, real_load_rate, \
                  cumulative_simulated_teu, cumulative_real_teu, difference) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.vessel,
                    row.hour,
                    row.simulated_discharge_rate,
                    row.simulated_load_rate,
                    row.real_discharge_rate,
                    row.real_load_rate,
                    row.cumulative_simulated_teu,
                    row.cumulative_real_teu,
                    row.difference,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
