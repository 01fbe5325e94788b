//! 标准化错误处理
//!
//! 定义项目专用的错误类型

use thiserror::Error;

/// 项目主要错误类型
#[derive(Error, Debug)]
pub enum SumlogError {
    /// 累加溢出
    #[error("sum overflowed i32 adding {next} to {partial}")]
    Overflow { partial: i32, next: i32 },

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 输入文件读取或解析错误
    #[error("Input error: {0}")]
    Input(String),
}

impl From<std::io::Error> for SumlogError {
    fn from(err: std::io::Error) -> Self {
        SumlogError::Input(err.to_string())
    }
}

impl From<serde_yaml::Error> for SumlogError {
    fn from(err: serde_yaml::Error) -> Self {
        SumlogError::Input(err.to_string())
    }
}

/// 项目结果类型别名
pub type Result<T> = std::result::Result<T, SumlogError>;
