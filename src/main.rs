use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use todolists::app::AppState;
use todolists::persistence::{ensure_dir, get_data_dir, init_local_data_dir, FileStore};
use todolists::store::{load_lists, ListStore};
use todolists::{config, input, logging, ui};

/// How long the event loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "todolists")]
#[command(about = "Color-tagged todo lists in the terminal", long_about = None)]
struct Cli {
    /// Use this data directory instead of the local or global .todolists
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todolists directory in the current directory
    Init,
    /// Print every list with its remaining and completed counts
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&cwd)?;
            println!("Initialized data directory: {}", data_dir.display());
            println!();
            println!("todolists will now keep its lists in this directory.");
            Ok(())
        }
        Some(Commands::Show) => {
            let data_dir = resolve_data_dir(cli.data_dir)?;
            show(&data_dir)
        }
        None => {
            let data_dir = resolve_data_dir(cli.data_dir)?;
            run_tui(&data_dir)
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let data_dir = match flag {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    ensure_dir(&data_dir)?;
    Ok(data_dir)
}

fn show(data_dir: &Path) -> Result<()> {
    let store = FileStore::new(data_dir);
    let lists = load_lists(&store)?;

    if lists.is_empty() {
        println!("No lists.");
        return Ok(());
    }
    for list in lists.iter().rev() {
        println!(
            "{:<24} {:<16} {} remaining, {} completed",
            list.title,
            list.color,
            list.remaining(),
            list.completed()
        );
    }
    Ok(())
}

fn run_tui(data_dir: &Path) -> Result<()> {
    let config = config::load(data_dir)?;

    // The app still runs without a log file
    if let Err(e) = logging::init(data_dir, &config.log_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    eprintln!("Using data directory: {}", data_dir.display());

    let palette = config.color_palette()?;
    let store = ListStore::load(Arc::new(FileStore::new(data_dir)), palette)?;
    let mut app = AppState::new(store, config.edit_switch);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save any open detail and wait for the writer
    app.shutdown();

    if let Err(err) = result {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
