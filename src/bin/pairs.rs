//! Terminal front-end.
//!
//! Reads one command per line: a card number to flip it, `new` for a fresh
//! round, `grid <size>` to change the board, `quit` to leave. Real elapsed
//! time is fed to the engine before each command, so settle delays and the
//! clock behave as they would with live timers.

use std::io::{BufRead, Write};
use std::time::Instant;

use clap::Parser;
use memory_pairs::render::{apply, Applied};
use memory_pairs::{Command, GameConfig, GridSize, PairsGame, RevealOutcome, TextRenderer};

#[derive(Parser)]
#[command(author, version, about = "Match-pairs memory game", long_about = None)]
struct Args {
    /// Number of cards (one of 8, 10, 12, 16, 20, 24, 30; others are clamped).
    /// Defaults to the config file's size, or 16.
    #[arg(short, long)]
    grid: Option<u32>,

    /// Deck seed for a reproducible deal.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file; command-line flags override it.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[arg(long)]
    match_delay_ms: Option<u64>,

    #[arg(long)]
    mismatch_delay_ms: Option<u64>,

    #[arg(long)]
    win_delay_ms: Option<u64>,
}

impl Args {
    fn config(&self) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let base = match &self.config {
            Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        Ok(self.merge(base))
    }

    /// Apply the flags that were given on top of `config`.
    fn merge(&self, mut config: GameConfig) -> GameConfig {
        if let Some(grid) = self.grid {
            config.grid_size = GridSize::clamped(grid);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ms) = self.match_delay_ms {
            config.match_delay_ms = ms;
        }
        if let Some(ms) = self.mismatch_delay_ms {
            config.mismatch_delay_ms = ms;
        }
        if let Some(ms) = self.win_delay_ms {
            config.win_delay_ms = ms;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut game = PairsGame::new(args.config()?);
    let renderer = TextRenderer::new();
    let mut last = Instant::now();

    log::info!("starting with seed {}", game.seed());
    println!("{}", renderer.frame(&game.snapshot()));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        let now = Instant::now();
        game.advance(now - last);
        last = now;

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match apply(&mut game, command) {
            Applied::Quit => break,
            Applied::Grid(Err(e)) => eprintln!("{}", e),
            Applied::Reveal(RevealOutcome::Rejected(reason)) => {
                eprintln!("can't flip that card: {:?}", reason)
            }
            Applied::Reveal(_) => {
                if let Command::Reveal(index) = command {
                    if let Some(card) = game.snapshot().cards.get(index) {
                        println!("{}", card.label());
                    }
                }
            }
            Applied::NewGame | Applied::Grid(Ok(())) => {}
        }

        println!("{}", renderer.frame(&game.snapshot()));

        // Let a pending pair (and a pending win) settle before the next prompt.
        let mut settled = false;
        while game.round().locked || (game.deck().is_complete() && !game.is_won()) {
            let Some(wait) = game.next_deadline() else { break };
            std::thread::sleep(wait);
            let now = Instant::now();
            game.advance(now - last);
            last = now;
            settled = true;
        }
        if settled {
            println!("{}", renderer.frame(&game.snapshot()));
        }

        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
    }
    Ok(())
}
