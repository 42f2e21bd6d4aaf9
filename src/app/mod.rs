//! Application layer - wires sources and the decision core per invocation.

pub mod picks;

pub use picks::{parse_slate_date, slate_month, PickReport, PickRun};
