//! 基于 `Write` 的 Logger 实现
//!
//! 控制台输出就是写入 stdout 的 `WriterLogger`。写入失败不会返回给调用方，
//! 只在诊断通道上报告一条 warn。

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use tracing::warn;

use crate::domain::{format_line, LogLevel, Logger};

/// 写入任意 sink 的 Logger
///
/// sink 由互斥锁保护，保证多个调用方共享时每行完整输出。
pub struct WriterLogger<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> WriterLogger<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// 取回底层 sink
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, level: LogLevel, message: &str) {
        let line = format_line(level, message);
        // 即使之前有写入方 panic，也继续使用 sink
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(sink, "{}", line).and_then(|_| sink.flush()) {
            warn!(log_level = %level, error = %e, "failed to write log line to sink");
        }
    }
}

impl<W: Write + Send> Logger for WriterLogger<W> {
    fn log_information(&self, message: &str) {
        self.write_line(LogLevel::Information, message);
    }

    fn log_error(&self, message: &str) {
        self.write_line(LogLevel::Error, message);
    }
}

/// 控制台 Logger，输出到标准输出
pub type ConsoleLogger = WriterLogger<Stdout>;

impl ConsoleLogger {
    pub fn stdout() -> Self {
        WriterLogger::new(io::stdout())
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::stdout()
    }
}
