//! 求和与日志
//!
//! 对整数序列求和，并通过注入的 Logger 报告结果：
//! - `Logger` 能力：`INFO:` / `ERROR:` 前缀的单行输出
//! - `Processor` 能力：求和，缺失输入和溢出都在内部处理
//!
//! # 架构分层
//!
//! - `domain`: 能力定义（trait）
//! - `infrastructure`: Logger 实现和诊断日志
//! - `application`: 处理器实现与装配

// 领域层
pub mod domain;

// 基础设施层
pub mod infrastructure;

// 应用层
pub mod application;

pub mod config;
pub mod errors;

pub use application::{checked_sum, DataProcessor, ProcessorBuilder, MISSING_DATA_MESSAGE};
pub use config::{AppConfig, InputFile, DEFAULT_DATA};
pub use domain::{LogLevel, Logger, Processor};
pub use errors::{Result, SumlogError};
pub use infrastructure::telemetry::{LogConfig, LogFormat};
pub use infrastructure::{ConsoleLogger, LogRecord, RecordingLogger, WriterLogger};

/// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
