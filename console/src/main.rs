mod board_view;
mod command;
mod config;
mod session;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};

use config::{get_config_manager, CONFIG_FILE};
use session::ConsoleSession;

#[derive(Parser)]
#[command(name = "snake_console")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Board size, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = get_config_manager(&args.config);
    let mut config = manager.get_config()?;
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    if args.save_config {
        manager.set_config(&config)?;
        log!("Config saved to {}", args.config);
    }

    log!(
        "Starting snake console: board {}x{}, base tick {} ms",
        config.board_size,
        config.board_size,
        config.settings.base_tick_interval_ms
    );

    ConsoleSession::new(&config)?.run().await?;

    Ok(())
}
