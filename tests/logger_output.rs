//! Logger 输出格式测试

mod common;

use std::io::Write;
use std::sync::Arc;
use std::thread;

use sumlog::{Logger, WriterLogger};

fn render(f: impl FnOnce(&WriterLogger<Vec<u8>>)) -> String {
    common::setup();
    let logger = WriterLogger::new(Vec::new());
    f(&logger);
    String::from_utf8(logger.into_inner()).unwrap()
}

#[test]
fn test_info_and_error_prefixes() {
    let output = render(|logger| {
        logger.log_information("hello");
        logger.log_error("bad");
    });
    assert_eq!(output, "INFO: hello\nERROR: bad\n");
}

#[test]
fn test_message_written_verbatim() {
    let message = "  spaced\ttab  ünïcødé %s {} ";
    let output = render(|logger| logger.log_error(message));
    assert_eq!(output, format!("ERROR: {}\n", message));
}

#[test]
fn test_empty_and_long_messages() {
    let long = "a".repeat(1 << 20);
    let output = render(|logger| {
        logger.log_information("");
        logger.log_error(&long);
    });

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "INFO: ");
    assert!(lines[1].starts_with("ERROR: aaa"));
    assert_eq!(lines[1].len(), "ERROR: ".len() + long.len());
}

#[test]
fn test_file_sink() {
    common::setup();
    let file = tempfile::NamedTempFile::new().unwrap();
    let logger = WriterLogger::new(file.reopen().unwrap());

    logger.log_information("Processed sum: 15");
    drop(logger);

    let content = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "INFO: Processed sum: 15\n");
}

/// 共享 sink 时每行保持完整
#[test]
fn test_concurrent_writers_do_not_interleave() {
    common::setup();
    let logger = Arc::new(WriterLogger::new(Vec::new()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logger = logger.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    logger.log_information(&format!("worker-{}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let logger = Arc::try_unwrap(logger).ok().unwrap();
    let output = String::from_utf8(logger.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines
        .iter()
        .all(|l| l.starts_with("INFO: worker-") && l.len() <= "INFO: worker-7".len()));
}

/// 写入失败的 sink 不影响调用方
#[test]
fn test_failing_sink_is_silent() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    common::setup();
    let logger = WriterLogger::new(Closed);
    logger.log_information("dropped");
    logger.log_error("dropped");
}
