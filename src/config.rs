//! 配置管理
//!
//! 所有参数都可省略，省略时处理固定序列 `[1, 2, 3, 4, 5]`。

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;
use crate::infrastructure::telemetry::LogFormat;

/// 默认输入
pub const DEFAULT_DATA: [i32; 5] = [1, 2, 3, 4, 5];

#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Sums a list of integers and logs the result"
)]
pub struct AppConfig {
    /// 逗号分隔的整数，替换默认输入
    #[arg(
        long,
        env = "SUMLOG_DATA",
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "input"
    )]
    pub data: Option<Vec<i32>>,

    /// YAML/JSON 输入文件：序列或 `data:` 字段
    #[arg(long, env = "SUMLOG_INPUT")]
    pub input: Option<PathBuf>,

    /// 以缺失输入调用处理器
    #[arg(long, default_value_t = false)]
    pub no_data: bool,

    /// 诊断日志格式: pretty, compact, json
    #[arg(long, env = "SUMLOG_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// 输入文件内容
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputFile {
    /// 裸序列 `[1, 2, 3]`
    Sequence(Vec<i32>),
    /// `data: [1, 2, 3]`，`data` 为空或缺失表示无输入
    Document { data: Option<Vec<i32>> },
}

impl InputFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading input file");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn into_data(self) -> Option<Vec<i32>> {
        match self {
            InputFile::Sequence(data) => Some(data),
            InputFile::Document { data } => data,
        }
    }
}

impl AppConfig {
    /// 确定交给处理器的数据
    ///
    /// 优先级：`--no-data` > `--input` > `--data` > 默认序列
    pub fn resolve_data(&self) -> Result<Option<Vec<i32>>> {
        if self.no_data {
            return Ok(None);
        }
        if let Some(path) = &self.input {
            return Ok(InputFile::load(path)?.into_data());
        }
        Ok(Some(
            self.data.clone().unwrap_or_else(|| DEFAULT_DATA.to_vec()),
        ))
    }
}
