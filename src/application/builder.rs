//! 处理器构建器
//!
//! 在装配阶段检查 Logger 是否已提供，缺失时立即失败。

use crate::domain::Logger;
use crate::errors::{Result, SumlogError};

use super::processor::DataProcessor;

/// 处理器构建器
pub struct ProcessorBuilder<L: Logger> {
    logger: Option<L>,
}

impl<L: Logger> ProcessorBuilder<L> {
    pub fn new() -> Self {
        Self { logger: None }
    }

    /// 设置 Logger
    pub fn logger(mut self, logger: L) -> Self {
        self.logger = Some(logger);
        self
    }

    /// 构建处理器
    pub fn build(self) -> Result<DataProcessor<L>> {
        let logger = self
            .logger
            .ok_or_else(|| SumlogError::Config("logger not set. Use .logger() first.".into()))?;
        Ok(DataProcessor::new(logger))
    }
}

impl<L: Logger> Default for ProcessorBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
