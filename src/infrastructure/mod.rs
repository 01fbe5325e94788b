//! 基础设施层：Logger 的具体实现和诊断日志

pub mod console;
pub mod memory;
pub mod telemetry;

pub use console::{ConsoleLogger, WriterLogger};
pub use memory::{LogRecord, RecordingLogger};
