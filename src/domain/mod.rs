//! Domain Layer
//!
//! Capability definitions the rest of the crate is written against

pub mod logger;
pub mod processor;

pub use logger::{format_line, LogLevel, Logger};
pub use processor::Processor;
