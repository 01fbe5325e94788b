//! 应用层：处理器实现与装配

pub mod builder;
pub mod processor;

pub use builder::ProcessorBuilder;
pub use processor::{checked_sum, DataProcessor, MISSING_DATA_MESSAGE};
