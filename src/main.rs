use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sumlog::infrastructure::telemetry;
use sumlog::{AppConfig, ConsoleLogger, LogConfig, Processor, ProcessorBuilder};

fn main() -> Result<()> {
    let cfg = AppConfig::parse();
    telemetry::init(LogConfig::default().with_format(cfg.log_format));

    let data = cfg.resolve_data().context("failed to resolve input data")?;
    let processor = ProcessorBuilder::new()
        .logger(ConsoleLogger::stdout())
        .build()
        .context("failed to assemble processor")?;

    info!(version = sumlog::VERSION, "processing");
    processor.process(data.as_deref());

    info!("done");
    Ok(())
}
