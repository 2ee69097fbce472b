//! `yg-output` — result writers for the yardgate engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                               |
//! |----------|---------|---------------------------------------------|
//! | *(none)* | CSV     | `hour_windows.csv`, `vessel_progress.csv`   |
//! | `sqlite` | SQLite  | `slots.db`                                  |
//!
//! Both implement [`WindowWriter`] over the flat row types in [`row`], so a
//! caller can pick a backend at startup and drive it uniformly:
//!
//! ```rust,ignore
//! use yg_output::{CsvWriter, WindowWriter, WindowRow};
//!
//! let rows: Vec<WindowRow> = windows.iter().map(WindowRow::from).collect();
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! writer.write_windows(&rows)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{ProgressRow, WindowRow};
pub use writer::WindowWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
