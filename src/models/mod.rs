pub mod day;
pub mod event;
pub mod grid;
pub mod notice;
pub mod period;
pub mod request;

pub use day::DayTable;
pub use event::ScheduleEvent;
pub use grid::{DayGrid, GridCell};
pub use notice::Notice;
pub use period::{Break, DurationType, PeriodToken};
pub use request::{BreakInput, FieldValue, ScheduleItem, TimetableRequest};
