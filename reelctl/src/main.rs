//! Headless Reel carousel simulator.

mod simulate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use reel_config::{ConfigSource, DeviceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "reelctl",
    about = "Drive a headless Reel carousel from the command line"
)]
struct Cli {
    /// Device configuration file (TOML or JSON). Takes precedence over
    /// REEL_CONFIG_PATH, REEL_CONFIG_JSON and the default file candidates.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bind a carousel, replay a key script and print the rendered strip
    Simulate(simulate::SimulateArgs),
    /// Print the resolved device configuration and where it came from
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;
    tracing::debug!(?source, "device configuration loaded");

    match cli.command {
        Command::Simulate(args) => simulate::run(&args, &config),
        Command::Config => print_config(&config, &source),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<(DeviceConfig, ConfigSource)> {
    match path {
        Some(path) => {
            let config = DeviceConfig::load_from_file(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        }
        None => DeviceConfig::load_from_env(),
    }
}

fn describe(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Default => "defaults".to_owned(),
        ConfigSource::EnvPath(path) => format!("$REEL_CONFIG_PATH ({})", path.display()),
        ConfigSource::EnvInline => "$REEL_CONFIG_JSON".to_owned(),
        ConfigSource::File(path) => path.display().to_string(),
    }
}

fn print_config(config: &DeviceConfig, source: &ConfigSource) -> anyhow::Result<()> {
    let raw = toml::to_string(config).context("failed to serialize device config")?;
    let carousel = config.carousel();

    println!("# source: {}", describe(source));
    print!("{raw}");
    println!("# effective horizontal carousel settings");
    println!("# bind_delay_ms = {}", carousel.bind_delay_ms());
    println!("# fade = {}", carousel.fade());
    println!("# animate = {}", carousel.animate());
    for warning in reel_config::validation::check(config)?.items {
        println!("# warning: {}", warning.message);
        if let Some(hint) = warning.hint {
            println!("#   hint: {hint}");
        }
    }
    Ok(())
}
