mod parser;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use parser::parse_schedule;
pub use structs::{Event, Schedule};
