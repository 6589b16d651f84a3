// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wealth_board::{
    logging, render_text, BoardConfig, Command, Dispatcher, RandomUserSource,
};

#[derive(Parser, Debug)]
#[command(name = "wealth-board", version, about = "Random people, their money, and five buttons")]
struct Cli {
    /// Random-user API endpoint (overrides WEALTH_BOARD_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// People fetched at startup (overrides WEALTH_BOARD_INITIAL_PEOPLE)
    #[arg(long, global = true)]
    initial: Option<usize>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive terminal board (default)
    Tui,
    /// Apply commands in order and print the final board
    Run {
        /// add, double, sort, millionaires, wealth (or their long names)
        commands: Vec<Command>,

        /// Print the board as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BoardConfig::from_env().with_overrides(cli.endpoint, cli.initial);

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Run { commands, json } => {
            logging::init("warn");
            run_script(&config, &commands, json)?;
        }
        Mode::Tui => {
            logging::init("off");
            run_ui_mode(&config)?;
        }
    }

    Ok(())
}

fn run_script(config: &BoardConfig, commands: &[Command], json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let dispatcher = Dispatcher::new(RandomUserSource::new(config)?);

    let board = runtime.block_on(async {
        dispatcher
            .seed(config.initial_people)
            .await
            .context("failed to fetch initial people")?;

        for command in commands {
            dispatcher
                .dispatch(*command)
                .await
                .with_context(|| format!("command '{}' failed", command))?;
        }

        Ok::<_, anyhow::Error>(dispatcher.snapshot().await)
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        println!("{}", render_text(board.people(), board.summaries()));
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &BoardConfig) -> Result<()> {
    println!("💰 Loading Wealth Board...\n");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let dispatcher = Dispatcher::new(RandomUserSource::new(config)?);

    // Startup fetches are best effort; the board still opens if the API is down
    println!("👥 Fetching {} random people...", config.initial_people);
    let seeded = runtime.block_on(dispatcher.seed(config.initial_people));
    if let Err(err) = &seeded {
        eprintln!("⚠️  {}", err);
    }

    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(dispatcher, runtime);
    if let Err(err) = seeded {
        app.status = Some(ui::StatusMessage::Error(err.to_string()));
    }
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &BoardConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or script it: cargo run -- run add double wealth");
    std::process::exit(1);
}
