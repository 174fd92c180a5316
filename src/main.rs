mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{format_due_date, format_priority, format_status, format_task};
use persistence::{ensure_data_dir, get_data_dir, init_data_dir, init_local_data_dir, FileKv, KeyValueStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use store::TodoStore;

/// How long the event loop waits for input before re-checking alerts
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "jotlist")]
#[command(about = "A small terminal to-do list with priorities, due dates and local persistence", long_about = None)]
struct Cli {
    /// Directory holding the saved tasks. Defaults to the nearest .jotlist, then ~/.jotlist
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .jotlist directory in the current directory (or at --data-dir)
    Init,
    /// Print the saved tasks
    List {
        /// Which tasks to show: all, pending or completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            match cli.data_dir {
                Some(dir) => {
                    init_data_dir(&dir)?;
                    println!("Initialized jotlist directory: {}", dir.display());
                }
                None => {
                    let data_dir = init_local_data_dir()?;
                    println!("Initialized jotlist directory: {}", data_dir.display());
                    println!();
                    println!("Tasks added from this directory (or below) will be stored there.");
                }
            }
            Ok(())
        }
        Some(Commands::List { filter }) => {
            let data_dir = resolve_data_dir(cli.data_dir)?;
            let store = TodoStore::load(Rc::new(FileKv::new(&data_dir)));
            print_todos(&store, &filter);
            Ok(())
        }
        None => {
            let data_dir = resolve_data_dir(cli.data_dir)?;
            run_tui(data_dir)
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    ensure_data_dir(&dir)?;
    Ok(dir)
}

fn print_todos(store: &TodoStore, filter: &str) {
    let todos = store.filter_todos(filter);
    if todos.is_empty() {
        println!("No task found");
        return;
    }

    for todo in todos {
        println!(
            "{:<34}{:<16}{:<17}{}",
            format_task(&todo.task),
            format_due_date(&todo.due_date),
            format_priority(todo.priority.as_str()),
            format_status(todo.completed)
        );
    }
}

fn run_tui(data_dir: PathBuf) -> Result<()> {
    let _log_guard = logging::init_logging(&data_dir).context("Failed to initialize logging")?;

    // Build the storage, hand it to the store, hand both to the controller
    let kv: Rc<dyn KeyValueStore> = Rc::new(FileKv::new(&data_dir));
    let store = TodoStore::load(kv.clone());
    let mut app = AppState::new(store, kv);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Exiting");

    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.expire_alert(Instant::now());
    }
}
