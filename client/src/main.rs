mod commands;
mod console;
mod render;

use clap::Parser;
use common::config::{CONFIG_FILE, ConfigError, GameConfig, Validate, get_config_manager};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, TicTacToeSession, TicTacToeSessionSettings};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_client", version, about = "Tic-tac-toe in the terminal, against a friend or a bot")]
struct Args {
    /// YAML config file; missing file means defaults.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// vs-human or vs-bot
    #[arg(long)]
    mode: Option<GameMode>,

    /// random or optimal
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Seed for the random bot, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: GameConfig) -> Result<GameConfig, ConfigError> {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(bot_delay_ms) = self.bot_delay_ms {
            config.bot_delay_ms = bot_delay_ms;
        }
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);
    let config = args.apply_overrides(config_manager.get_config()?)?;
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = TicTacToeSession::new(TicTacToeSessionSettings::from(&config), rng);

    console::run_console(session).await?;
    Ok(())
}
