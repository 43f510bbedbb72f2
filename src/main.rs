use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{CalculatorState, History, Operator};
use zcalc::config::{Config, LoggingConfig};
use zcalc::keypad::{Key, parse_keys};
use zcalc::screen::{CalculatorScreen, render, render_history, render_keypad};

/// Keypad calculator. Sessions do not persist between runs, so use `--keys`
/// to replay the presses that lead up to a command.
#[derive(Parser)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Key sequence pressed before the command, e.g. "2 + 3"
    #[arg(short, long, global = true)]
    keys: Option<String>,

    /// Print the state and history as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type a digit or the decimal point
    Numeral { token: char },
    /// Select an operator (+, -, ×, *, ÷, /)
    Operator { op: String },
    /// Evaluate the pending computation
    Equals,
    /// Reset the active computation
    Clear,
    /// Delete the last typed character
    Backspace,
    /// Press a sequence of keys
    Press { keys: Vec<String> },
    /// Print the history panel
    History,
    /// Print the keypad layout
    Keypad,
    /// Run an interactive session reading keys from stdin
    Repl,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    display: &'a str,
    show_history: bool,
    state: &'a CalculatorState,
    history: &'a History,
}

fn init_logging(config: &LoggingConfig) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&config.logging);

    let mut screen = CalculatorScreen::new().with_history_shown(config.display.show_history);
    println!("{}", execute(&cli, &mut screen)?);

    if matches!(cli.command, Commands::Repl) {
        run_repl(&mut screen, cli.json)?;
    }

    Ok(())
}

/// Replay `--keys`, apply the subcommand and return what it prints.
///
/// `repl` only replays the keys; the caller runs the prompt.
fn execute(cli: &Cli, screen: &mut CalculatorScreen) -> Result<String> {
    if let Some(keys) = &cli.keys {
        let keys = parse_keys(keys).context("Invalid --keys sequence")?;
        screen.press_all(keys);
    }

    match &cli.command {
        Commands::Numeral { token } => screen.press(Key::Numeral(*token)),
        Commands::Operator { op } => {
            let op = Operator::from_symbol(op)
                .with_context(|| format!("Unknown operator '{}'", op))?;
            screen.press(op.into());
        }
        Commands::Equals => screen.press(Key::Equals),
        Commands::Clear => screen.press(Key::Clear),
        Commands::Backspace => screen.press(Key::Backspace),
        Commands::Press { keys } => {
            let keys = parse_keys(&keys.join(" ")).context("Invalid key sequence")?;
            screen.press_all(keys);
        }
        Commands::History => {
            return Ok(render_history(screen.engine().history())
                .trim_end()
                .to_string());
        }
        Commands::Keypad => return Ok(render_keypad()),
        Commands::Repl => {}
    }

    screen_output(screen, cli.json)
}

fn screen_output(screen: &CalculatorScreen, json: bool) -> Result<String> {
    if json {
        let snapshot = Snapshot {
            display: screen.display_text(),
            show_history: screen.show_history(),
            state: screen.engine().state(),
            history: screen.engine().history(),
        };
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize state")
    } else {
        Ok(render(screen))
    }
}

fn run_repl(screen: &mut CalculatorScreen, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "quit" | "exit" | "q" => break,
            "keypad" => {
                println!("{}", render_keypad());
                continue;
            }
            _ => {}
        }

        match parse_keys(&line) {
            Ok(keys) => {
                screen.press_all(keys);
                println!("{}", screen_output(screen, json)?);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
