mod cli;
mod demo;
mod dump;
mod runner;
mod ui;

use crate::{cli::Config, demo::DemoCore, runner::Runner, ui::App};
use clap::Parser;
use debugger::{RefreshDriver, Renderer};
use eyre_pretty::eyre::Result;
use std::{path::Path, time::Duration};
use tracing::info;

fn setup_tracing(path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let file = std::fs::File::options()
        .truncate(true)
        .create(true)
        .write(true)
        .open(path)?;

    let (file_nb, guard) = tracing_appender::non_blocking(file);
    let file_layer = fmt::layer().with_writer(file_nb).with_ansi(false);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or(EnvFilter::new("inspector=debug,debugger=debug,machine=debug"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    eyre_pretty::install()?;

    let config = Config::parse();
    let _tracing_guard = setup_tracing(&config.log)?;

    info!(
        cpu = config.machine.cpu,
        speed = config.machine.speed,
        memory = %bytesize::ByteSize::kb(u64::from(config.machine.memory)).display(),
        "starting inspector"
    );

    let core = DemoCore::new(config.machine);
    let runner = Runner::new(core, config.run)?;
    let mut driver = RefreshDriver::new(
        Renderer::default(),
        Duration::from_millis(config.refresh_ms),
    );

    if let Some(count) = config.dump {
        return dump::dump(&mut driver, &runner, std::io::stdout().lock(), count);
    }

    let terminal = ratatui::init();
    let result = App::new(runner, driver).run(terminal);
    ratatui::restore();

    result
}
