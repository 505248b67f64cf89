pub mod generate;
pub mod grid;
pub mod resolver;

pub use generate::{GenerateOutcome, Timetable, generate};
