//! Core attendance logic for checador.
//!
//! This crate turns a tab-separated time-clock export into daily attendance
//! records:
//! - Parsing: one punch per data line, with skipped lines counted by reason
//! - Aggregation: one record per employee and date, entry/exit from the first and last punch
//! - Worked time: entry-to-exit span, including shifts that cross midnight
//! - Filtering and display shaping for the renderers in `chk-export`

pub mod date;
mod duration;
mod filter;
mod punch;
mod record;
mod store;
pub mod view;

pub use date::{DateError, parse_iso_date};
pub use duration::{NO_RECORD, WorkedDuration, compute_worked, parse_time_of_day, worked_label};
pub use filter::{FilterCriteria, filter};
pub use punch::{MIN_FIELDS, Punch, Rejection, parse_line};
pub use record::{AttendanceRecord, RecordKey, aggregate};
pub use store::{LoadReport, RecordStore, Session};
pub use view::{DayGroup, DayView, display_cells, format_date};
