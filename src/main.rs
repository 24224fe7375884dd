use clap::Parser;
use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::fmt::time;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};
use vulnerable_hello_demo::cli::Cli;
use vulnerable_hello_demo::config::Config;
use vulnerable_hello_demo::demo;
use vulnerable_hello_demo::errors::{DemoError, DemoResult};

fn init_tracing() {
    let fmt_layer = fmt::layer()
        .pretty()
        .with_thread_ids(true)
        .with_timer(time::UtcTime::rfc_3339());

    Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}

fn main() -> DemoResult<()> {
    init_tracing();

    tracing::debug!("CLI starting up");
    let cli = Cli::parse();

    let proj_dirs = ProjectDirs::from("dev", "ecpeter23", "vuln-demo")
        .ok_or_else(|| DemoError::Other("Unable to determine project directories".into()))?;

    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;

    let config = Config::load(config_dir)?;

    if cli.no_color || !config.output.color {
        console::set_colors_enabled(false);
    }

    if !cli.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        demo::write_banner(&mut out)?;
        out.flush()?;
    }

    demo::vulnerability_demo()?;
    Ok(())
}
