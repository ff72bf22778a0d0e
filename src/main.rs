mod app;
mod config;
mod grid;
mod input;
mod life;
mod logging;
mod minesweeper;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{AppConfig, GameKind};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::InputEvent;
use life::Pattern;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "cellgrid")]
#[command(about = "Minesweeper and Conway's Game of Life in the terminal")]
struct Args {
    /// Game to play (minesweeper, life)
    #[arg(short = 'g', long)]
    game: Option<String>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of mines (minesweeper; at least width*height fills the board)
    #[arg(short = 'm', long)]
    mines: Option<usize>,

    /// Seed for a reproducible mine layout
    #[arg(long)]
    seed: Option<u64>,

    /// Frames between generations (life)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    speed: Option<i32>,

    /// Starting pattern (glider, blinker, block, beacon, rpentomino)
    #[arg(long)]
    pattern: Option<String>,

    /// Width of one board cell in terminal columns
    #[arg(long = "cell-width")]
    cell_width: Option<u16>,

    /// Height of one board cell in terminal rows
    #[arg(long = "cell-height")]
    cell_height: Option<u16>,

    /// Config file (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the user data directory)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long = "write-config")]
    write_config: bool,
}

fn parse_game(s: &str) -> GameKind {
    match s.to_lowercase().as_str() {
        "life" | "gol" | "conway" => GameKind::Life,
        _ => GameKind::Minesweeper,
    }
}

fn parse_pattern(s: &str) -> Pattern {
    match s.to_lowercase().as_str() {
        "blinker" => Pattern::Blinker,
        "block" => Pattern::Block,
        "beacon" => Pattern::Beacon,
        "rpentomino" | "r-pentomino" | "r" => Pattern::RPentomino,
        _ => Pattern::Glider,
    }
}

/// Command-line flags override values from the config file
fn apply_args(config: &mut AppConfig, args: &Args) {
    if let Some(game) = &args.game {
        config.game = parse_game(game);
    }

    match config.game {
        GameKind::Minesweeper => {
            let ms = &mut config.minesweeper;
            ms.width = args.width.unwrap_or(ms.width);
            ms.height = args.height.unwrap_or(ms.height);
            ms.view.cell_width = args.cell_width.unwrap_or(ms.view.cell_width);
            ms.view.cell_height = args.cell_height.unwrap_or(ms.view.cell_height);
        }
        GameKind::Life => {
            let lc = &mut config.life;
            lc.width = args.width.unwrap_or(lc.width);
            lc.height = args.height.unwrap_or(lc.height);
            lc.view.cell_width = args.cell_width.unwrap_or(lc.view.cell_width);
            lc.view.cell_height = args.cell_height.unwrap_or(lc.view.cell_height);
        }
    }

    if let Some(mines) = args.mines {
        config.minesweeper.mines = mines;
    }
    if let Some(seed) = args.seed {
        config.minesweeper.seed = Some(seed);
    }
    if let Some(speed) = args.speed {
        config.life.speed = speed;
    }
    if let Some(pattern) = &args.pattern {
        config.life.start_pattern = Some(parse_pattern(pattern));
    }
}

fn frame_rect(width: u16, height: u16) -> Rect {
    Rect {
        x: 0,
        y: 0,
        width,
        height,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = logging::init(args.log_file.clone()) {
        eprintln!("Logging disabled: {}", err);
    }

    let mut config = match &args.config {
        // A config file that is about to be written need not exist yet
        Some(path) if args.write_config && !path.exists() => AppConfig::default(),
        path => AppConfig::load(path.as_deref()).context("failed to load configuration")?,
    };
    apply_args(&mut config, &args);
    config.validate()?;

    if args.write_config {
        let path = args
            .config
            .clone()
            .or_else(AppConfig::default_path)
            .context("no config directory available")?;
        config.save_to_file(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut app = App::new(&config);

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut io::stdout());

    if let Err(err) = &res {
        log::error!("Event loop failed: {}", err);
    }
    log::info!("Exiting");
    res.context("event loop failed")
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            restore_terminal(&mut io::stdout());
            Err(err).context("failed to initialize terminal")
        }
    }
}

/// Undo terminal setup. Every step is attempted even if an earlier one fails.
fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        log::warn!("Failed to restore terminal screen: {}", err);
    }
}

/// Apply one terminal event; returns true when the screen needs redrawing
fn handle_event(app: &mut App, event: &Event) -> bool {
    match event {
        Event::Resize(width, height) => {
            app.layout(ui::canvas_area(frame_rect(*width, *height)));
            true
        }
        event => match InputEvent::from_crossterm(event) {
            Some(input) => {
                app.handle_input(input);
                true
            }
            None => false,
        },
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    // Fixed 60 Hz tick cadence
    const FRAME_DURATION: Duration = Duration::from_micros(16_667);
    let mut last_tick = Instant::now();

    let size = terminal.size()?;
    app.layout(ui::canvas_area(frame_rect(size.width, size.height)));
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| ui::render(frame, app))?;
            dirty = false;
        }

        let timeout = FRAME_DURATION.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            // Drain everything already queued before the next draw
            loop {
                dirty |= handle_event(app, &event::read()?);
                if app.should_quit {
                    return Ok(());
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= FRAME_DURATION {
            dirty |= app.tick();
            last_tick = Instant::now();
        }
    }
}
