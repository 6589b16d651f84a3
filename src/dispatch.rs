// 🎛️ Command Dispatch - the five user actions mapped onto the board
// Fetches run outside the board lock; every store write goes through it

use crate::board::{Board, Outcome, Transition};
use crate::source::{PersonSource, SourceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

// ============================================================================
// COMMANDS
// ============================================================================

/// A zero-argument user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    AddPerson,
    DoubleMoney,
    SortByRichest,
    ShowMillionaires,
    CalculateWealth,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::AddPerson,
        Command::DoubleMoney,
        Command::ShowMillionaires,
        Command::SortByRichest,
        Command::CalculateWealth,
    ];

    /// Canonical kebab-case name, used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::AddPerson => "add-person",
            Command::DoubleMoney => "double-money",
            Command::SortByRichest => "sort-by-richest",
            Command::ShowMillionaires => "show-millionaires",
            Command::CalculateWealth => "calculate-wealth",
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddPerson => "Add User 👱‍♂️",
            Command::DoubleMoney => "Double Money 💰",
            Command::SortByRichest => "Sort by Richest ↓",
            Command::ShowMillionaires => "Show Only Millionaires 💵",
            Command::CalculateWealth => "Calculate entire Wealth 🧮",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command '{0}' (expected add, double, sort, millionaires or wealth)")]
pub struct CommandParseError(pub String);

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "add-person" | "add-user" => Ok(Command::AddPerson),
            "double" | "double-money" => Ok(Command::DoubleMoney),
            "sort" | "sort-by-richest" => Ok(Command::SortByRichest),
            "millionaires" | "show-millionaires" => Ok(Command::ShowMillionaires),
            "wealth" | "calculate-wealth" => Ok(Command::CalculateWealth),
            other => Err(CommandParseError(other.to_string())),
        }
    }
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Owns the board and the person source; the single writer for the store.
pub struct Dispatcher<S> {
    board: Arc<Mutex<Board>>,
    source: S,
}

impl<S> Clone for Dispatcher<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Dispatcher {
            board: Arc::clone(&self.board),
            source: self.source.clone(),
        }
    }
}

impl<S: PersonSource> Dispatcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_board(source, Board::new())
    }

    pub fn with_board(source: S, board: Board) -> Self {
        Dispatcher {
            board: Arc::new(Mutex::new(board)),
            source,
        }
    }

    /// Run one command.
    ///
    /// `AddPerson` awaits the source without holding the lock, so concurrent
    /// adds each append once, in completion order. A failed fetch leaves the
    /// board untouched.
    pub async fn dispatch(&self, command: Command) -> Result<Outcome, SourceError> {
        tracing::info!(%command, "dispatching command");

        let transition = match command {
            Command::AddPerson => Transition::Append(self.source.fetch_person().await?),
            Command::DoubleMoney => Transition::DoubleMoney,
            Command::SortByRichest => Transition::SortByRichest,
            Command::ShowMillionaires => Transition::ShowMillionaires,
            Command::CalculateWealth => Transition::CalculateWealth,
        };

        let mut board = self.board.lock().await;
        let outcome = board.apply(transition);
        tracing::debug!(people = board.len(), ?outcome, "board updated");
        Ok(outcome)
    }

    /// Startup fill: `count` sequential add-person commands.
    pub async fn seed(&self, count: usize) -> Result<(), SourceError> {
        for _ in 0..count {
            self.dispatch(Command::AddPerson).await?;
        }
        Ok(())
    }

    /// Copy of the current board for rendering.
    pub async fn snapshot(&self) -> Board {
        self.board.lock().await.clone()
    }
}
