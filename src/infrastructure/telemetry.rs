//! 诊断日志 - 基于 tracing 的结构化日志
//!
//! 与 Logger 能力无关：这里的事件只写到 stderr，stdout 留给 `INFO:`/`ERROR:` 行。
//!
//! # 环境变量
//! - `RUST_LOG`: 日志级别过滤（如 `debug`, `sumlog=trace`），默认 `warn`
//! - `SUMLOG_LOG_FORMAT`: 日志格式（`pretty`, `compact`, `json`）

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认过滤级别
pub const DEFAULT_FILTER: &str = "warn";

/// 日志格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 多行人类可读格式
    Pretty,
    /// 紧凑单行格式
    #[default]
    Compact,
    /// JSON 结构化格式
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// 是否启用颜色（json 格式忽略）
    pub enable_color: bool,
    /// 是否显示目标模块
    pub show_target: bool,
    /// `RUST_LOG` 未设置时使用的过滤规则
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            enable_color: true,
            show_target: true,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// 初始化诊断日志
///
/// 重复调用时保留第一次安装的 subscriber。
pub fn init(config: LogConfig) {
    let subscriber = tracing_subscriber::registry().with(config.env_filter());

    let result = match config.format {
        LogFormat::Pretty => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_ansi(config.enable_color),
            )
            .try_init(),
        LogFormat::Compact => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_ansi(config.enable_color),
            )
            .try_init(),
        LogFormat::Json => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_current_span(true),
            )
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "diagnostic subscriber already installed");
    }
}
