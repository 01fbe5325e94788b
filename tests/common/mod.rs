//! 测试通用工具

use std::sync::{Arc, Once};

use sumlog::{DataProcessor, RecordingLogger};

static INIT: Once = Once::new();

/// 初始化测试环境
pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// 绑定到共享记录型 Logger 的处理器
#[allow(dead_code)]
pub fn recording_processor() -> (DataProcessor<Arc<RecordingLogger>>, Arc<RecordingLogger>) {
    setup();
    let logger = Arc::new(RecordingLogger::new());
    (DataProcessor::new(logger.clone()), logger)
}
