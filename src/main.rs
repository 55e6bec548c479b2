// CalcTTY: button-grid calculator for the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use calctty::calculator::keys::{tokenize, Key};
use calctty::calculator::tape::DEFAULT_TAPE_LINES;
use calctty::calculator::{Calculator, Tape};
use calctty::logging::{init_logging, LogConfig, LogTarget};
use calctty::ui::App;

/// Button-grid calculator with scientific functions and memory
#[derive(Parser, Debug)]
#[command(name = "calctty", author, version, about, long_about = None)]
struct Cli {
    /// Run without the UI: press each whitespace-separated key label in
    /// turn and print the final display (e.g. "1 0 + 5 =")
    #[arg(short, long, value_name = "SCRIPT", allow_hyphen_values = true)]
    keys: Option<String>,

    /// With --keys, print the display after every press
    #[arg(short, long, requires = "keys")]
    trace: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "CALCTTY_LOG", default_value = "info")]
    log_level: String,

    /// Lines kept on the tape pane
    #[arg(long, default_value_t = DEFAULT_TAPE_LINES)]
    tape_lines: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The UI owns the terminal, so only headless runs may log to stderr
    let target = match (&cli.log_file, cli.keys.is_some()) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Off,
    };
    let _log_guard = init_logging(&LogConfig {
        level: cli.log_level.clone(),
        target,
    })?;

    if let Some(script) = &cli.keys {
        run_headless(script, cli.trace, cli.tape_lines);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Calculator::new(), cli.tape_lines);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Replay a key script against a fresh calculator and print the display
fn run_headless(script: &str, trace: bool, tape_lines: usize) {
    let keys = match tokenize(script) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            let labels: Vec<&str> = Key::ALL.iter().map(|k| k.label()).collect();
            eprintln!("Valid keys: {}", labels.join(" "));
            std::process::exit(1);
        }
    };

    info!(presses = keys.len(), "replaying key script");

    let mut calculator = Calculator::new();
    let mut tape = Tape::new(tape_lines);
    for key in keys {
        calculator.press(key);
        tape.record(key.label(), &calculator.display(), calculator.is_error());
        if let (true, Some(line)) = (trace, tape.last()) {
            println!("{}", line);
        }
    }

    println!("{}", calculator.display());
}
