use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use promptgenius_tui::app::App;
use promptgenius_tui::cli as subcommands;
use promptgenius_tui::clipboard::Clipboard;
use promptgenius_tui::config::{AppConfig, Cli, Command, GenerateArgs};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Poll timeout while a timed indicator is up.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match &cli.command {
        None => {
            let clipboard = cli.clipboard()?;
            run_tui(clipboard, cli.app_config())
        }
        Some(Command::Generate(args)) => generate(&cli, args),
        Some(Command::Options) => {
            print!("{}", subcommands::options_listing());
            Ok(())
        }
        Some(Command::About) => {
            print!("{}", subcommands::about_text());
            Ok(())
        }
    }
}

/// The wizard owns the terminal, so it logs to `--log-file` or nowhere.
/// Subcommands log to stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (&cli.command, &cli.log_file) {
        (_, Some(path)) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::sink)
                .init();
        }
        (Some(_), None) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn generate(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let mut clipboard = if args.copy {
        Some(cli.subcommand_clipboard()?)
    } else {
        None
    };
    let clipboard = clipboard.as_mut().map(|c| c.as_mut() as &mut dyn Clipboard);
    subcommands::generate(args, clipboard, &mut io::stdout().lock())?;
    Ok(())
}

fn run_tui(clipboard: Box<dyn Clipboard>, config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("wizard started");
    let result = event_loop(&mut terminal, App::new(clipboard, &config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("wizard exited with error: {e}");
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        // Block on input unless an indicator needs to time out
        if app.needs_polling() && !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.is_quit_key(key) {
                break;
            }
            app.handle_key(key);
        }
    }

    info!("wizard closed");
    Ok(())
}
