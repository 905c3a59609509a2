use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use studyflow::backend::{MemoryBackend, SharedSink};
use studyflow::cli::Cli;
use studyflow::config::Config;
use studyflow::logger::{self, Logger};
use studyflow::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match cli.config.as_ref() {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.fail_submissions {
        config.backend.fail_submissions = true;
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.backend.latency_ms = latency_ms;
        config.validate()?;
    }

    let memory_log = Logger::new();
    if let Some(path) = logger::init(&config.logging, memory_log.clone())? {
        log::info!("Logging to {}", path.display());
    }

    let backend = MemoryBackend::new().with_latency(Duration::from_millis(config.backend.latency_ms));
    backend.set_fail_submissions(config.backend.fail_submissions);
    let sink: SharedSink = Arc::new(backend);

    ui::run_app(config, sink, memory_log).await
}
