use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use pig_dice::core::{
    GameConfig, GameMode, SeatConfig, DEFAULT_SIDES, DEFAULT_TARGET, DEFAULT_TIMEOUT_SECS,
};
use pig_dice::rules::{Game, Outcome, TimedGame};
use pig_dice::strategy::{LineInput, Prompt, Terminal};

/// Play Pig at the console.
#[derive(Debug, Parser)]
#[command(name = "pig", version, about)]
struct Args {
    /// `regular` or `timed`. Asked at startup when omitted.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Score needed to win.
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: u32,

    /// Sides on the die.
    #[arg(long, default_value_t = DEFAULT_SIDES)]
    sides: u32,

    /// RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Time limit for timed games, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// A seat as `human:NAME` or `computer:NAME`. Repeat for more players.
    #[arg(long = "player", value_name = "KIND:NAME")]
    players: Vec<SeatConfig>,
}

impl Args {
    fn config(&self, mode: GameMode) -> GameConfig {
        let config = if self.players.is_empty() {
            GameConfig::default()
        } else {
            GameConfig::new(self.players.clone())
        };
        let config = config
            .with_target(self.target)
            .with_sides(self.sides)
            .with_seed(self.seed);
        match mode {
            GameMode::Regular => config.with_mode(GameMode::Regular),
            GameMode::Timed { .. } => config.with_timeout(self.timeout),
        }
    }
}

fn console() -> Box<dyn Prompt> {
    if std::io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(LineInput::new(std::io::stdin().lock()))
    }
}

/// The mode given on the command line, or the one typed at startup.
fn select_mode(explicit: Option<GameMode>, input: &mut dyn Prompt) -> anyhow::Result<GameMode> {
    match explicit {
        Some(mode) => Ok(mode),
        None => input
            .read_line("Enter game type (regular/timed)")?
            .parse()
            .context("cannot start game"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut input = console();
    let mode = select_mode(args.mode, input.as_mut())?;

    let config = args.config(mode);
    log::info!("starting {:?} game to {} with seed {}", config.mode, config.target, config.seed);

    let mut game = Game::from_config(&config, input)?.on_event(|event| println!("{}", event));
    match config.mode {
        GameMode::Regular => {
            game.play()?;
        }
        GameMode::Timed { timeout_secs } => {
            let mut timed = TimedGame::new(game, Duration::from_secs(timeout_secs));
            if let Outcome::TimedOut = timed.play()? {
                log::info!("no winner");
            }
        }
    }
    Ok(())
}
