// algotrace: step-by-step algorithm replay in the terminal

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::Level;

use algotrace::algorithms::{AlgorithmKey, AlgorithmKind};
use algotrace::input::parse_numbers;
use algotrace::playback::Speed;
use algotrace::registry::AlgorithmRegistry;
use algotrace::ui::App;

#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    version,
    about = "Replay sorting and searching algorithms step by step"
)]
struct Cli {
    /// Algorithm to trace.
    #[arg(long, short, value_enum, default_value_t = AlgorithmKey::Bubble)]
    algorithm: AlgorithmKey,

    /// Input numbers, separated by commas or spaces. Non-numeric tokens are ignored.
    #[arg(long, default_value = "64 34 25 12 22 11 90")]
    array: String,

    /// Value to look for (search algorithms only).
    #[arg(long, short, default_value_t = 22, allow_hyphen_values = true)]
    target: i64,

    /// Second algorithm to run side by side.
    #[arg(long, short, value_enum)]
    compare: Option<AlgorithmKey>,

    /// Autoplay speed.
    #[arg(long, value_enum, default_value_t = Speed::Normal)]
    speed: Speed,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level written to --log-file.
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Print the available algorithms and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(cli.log_level)
            .init();
    }

    let registry = AlgorithmRegistry::with_defaults();

    if cli.list {
        for d in registry.list_all() {
            let kind = match d.kind() {
                AlgorithmKind::Sorting => "sort",
                AlgorithmKind::Searching => "search",
            };
            println!(
                "{:<10} {:<15} {:<6} time {:<12} space {}",
                d.key, d.name, kind, d.time_complexity, d.space_complexity
            );
        }
        return Ok(());
    }

    let array = parse_numbers(&cli.array);
    tracing::info!(
        algorithm = %cli.algorithm,
        compare = ?cli.compare,
        len = array.len(),
        "starting"
    );

    let mut app = App::new(
        registry,
        array,
        Some(cli.target),
        cli.algorithm,
        cli.compare,
        cli.speed,
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
