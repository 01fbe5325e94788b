//! 求和处理器
//!
//! `DataProcessor` 是 `Processor` 的生产实现：对输入求和并通过注入的 Logger 报告结果。

use tracing::debug;

use crate::domain::{Logger, Processor};
use crate::errors::{Result, SumlogError};

/// 缺少输入时记录的错误
pub const MISSING_DATA_MESSAGE: &str = "Data cannot be null.";

/// 对序列求和，溢出时返回错误
pub fn checked_sum(data: &[i32]) -> Result<i32> {
    let mut sum: i32 = 0;
    for &item in data {
        sum = sum
            .checked_add(item)
            .ok_or_else(|| SumlogError::Overflow {
                partial: sum,
                next: item,
            })?;
    }
    Ok(sum)
}

/// 求和处理器
pub struct DataProcessor<L: Logger> {
    logger: L,
}

impl<L: Logger> DataProcessor<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn into_logger(self) -> L {
        self.logger
    }

    /// 失败边界内的部分：求和并报告
    fn sum_and_report(&self, data: &[i32]) -> Result<()> {
        let sum = checked_sum(data)?;
        self.logger.log_information(&format!("Processed sum: {}", sum));
        Ok(())
    }
}

impl<L: Logger> Processor for DataProcessor<L> {
    fn process(&self, data: Option<&[i32]>) {
        let Some(data) = data else {
            debug!("no data supplied");
            self.logger.log_error(MISSING_DATA_MESSAGE);
            return;
        };

        debug!(items = data.len(), "summing data");
        if let Err(e) = self.sum_and_report(data) {
            debug!(error = %e, "processing failed");
            self.logger.log_error(&format!("Error processing data: {}", e));
        }
    }
}
