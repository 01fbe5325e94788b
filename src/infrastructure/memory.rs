//! 内存 Logger
//!
//! 记录每次调用的级别和原文，用于测试和断言

use std::sync::{Mutex, MutexGuard};

use crate::domain::{format_line, LogLevel, Logger};

/// 一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// 记录型 Logger
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }

    /// 所有记录的快照
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// 指定级别的消息
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn information(&self) -> Vec<String> {
        self.messages(LogLevel::Information)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    /// 按控制台格式渲染的所有行
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|r| format_line(r.level, &r.message))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn log_information(&self, message: &str) {
        self.push(LogLevel::Information, message);
    }

    fn log_error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
