//! Logger 能力定义
//!
//! 处理器只依赖这个抽象，具体输出目标（控制台、文件、内存）可任意替换

use std::sync::Arc;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Information,
    Error,
}

impl LogLevel {
    /// 行前缀
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Information => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// 格式化一行日志: `<PREFIX>: <message>`
pub fn format_line(level: LogLevel, message: &str) -> String {
    format!("{}: {}", level.prefix(), message)
}

/// Logger trait
///
/// 两个操作都不返回结果，调用方无需处理失败。
pub trait Logger: Send + Sync {
    /// 记录普通信息
    fn log_information(&self, message: &str);

    /// 记录错误
    fn log_error(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log_information(&self, message: &str) {
        (**self).log_information(message)
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log_information(&self, message: &str) {
        (**self).log_information(message)
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log_information(&self, message: &str) {
        (**self).log_information(message)
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message)
    }
}
