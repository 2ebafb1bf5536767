//! Input commands for text adapters.

use thiserror::Error;

use crate::core::{ConfigError, GridSize};
use crate::engine::{PairsGame, RevealOutcome};

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("card numbers start at 1")]
    ZeroCard,
    #[error("grid needs a size, one of {:?}", GridSize::SUPPORTED)]
    MissingGridSize,
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("unknown command: {0}")]
    Unknown(String),
}

/// Something the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reveal the card at this 0-based index.
    Reveal(usize),
    /// Deal a fresh round (new game or play again).
    NewGame,
    /// Change the grid size. Validated when applied.
    Grid(u32),
    /// Leave.
    Quit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Card numbers are 1-based as printed on the board.
    ///
    /// ```
    /// use memory_pairs::render::Command;
    ///
    /// assert_eq!(Command::parse("3"), Ok(Command::Reveal(2)));
    /// assert_eq!(Command::parse("again"), Ok(Command::NewGame));
    /// assert_eq!(Command::parse("grid 12"), Ok(Command::Grid(12)));
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        match head.to_ascii_lowercase().as_str() {
            "n" | "new" | "again" | "play" => Ok(Command::NewGame),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "g" | "grid" => {
                let size = words.next().ok_or(CommandError::MissingGridSize)?;
                let cards = size
                    .parse::<u32>()
                    .map_err(|_| CommandError::NotANumber(size.to_string()))?;
                Ok(Command::Grid(cards))
            }
            word if word.chars().all(|c| c.is_ascii_digit()) => {
                let number = word
                    .parse::<usize>()
                    .map_err(|_| CommandError::NotANumber(word.to_string()))?;
                match number {
                    0 => Err(CommandError::ZeroCard),
                    n => Ok(Command::Reveal(n - 1)),
                }
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What applying a command did.
#[derive(Debug)]
pub enum Applied {
    Reveal(RevealOutcome),
    NewGame,
    Grid(Result<(), ConfigError>),
    Quit,
}

/// Forward a command to the engine.
pub fn apply(game: &mut PairsGame, command: Command) -> Applied {
    match command {
        Command::Reveal(index) => Applied::Reveal(game.reveal(index)),
        Command::NewGame => {
            game.new_game();
            Applied::NewGame
        }
        Command::Grid(cards) => {
            Applied::Grid(game.try_set_grid_size(cards))
        }
        Command::Quit => Applied::Quit,
    }
}
