//! Processor 能力定义

/// 数据处理器
///
/// `None` 表示调用方没有提供数据。实现不得向调用方抛出任何错误，
/// 所有结果只通过注入的 Logger 报告。
pub trait Processor {
    fn process(&self, data: Option<&[i32]>);
}
