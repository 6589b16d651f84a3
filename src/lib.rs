// Wealth Board - Core Library
// Exposes all modules for use in the terminal UI, the web server, and tests

pub mod person;
pub mod transforms;
pub mod money;
pub mod board;
pub mod source;
pub mod dispatch;
pub mod render;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use person::Person;
pub use transforms::{
    double_money, sort_by_richest, show_millionaires, calculate_wealth,
    MILLIONAIRE_THRESHOLD,
};
pub use money::format_money;
pub use board::{Board, Outcome, Transition};
pub use source::{PersonSource, RandomUserSource, SourceError};
pub use dispatch::{Command, CommandParseError, Dispatcher};
pub use render::{render_html, render_page, render_text};
pub use config::BoardConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
