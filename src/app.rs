use crate::config::{AppConfig, GameKind, ViewConfig};
use crate::grid::View;
use crate::input::{InputEvent, PointerButton, WheelDirection};
use crate::life::Life;
use crate::minesweeper::Minesweeper;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

/// The game being played
pub enum Game {
    Minesweeper(Minesweeper),
    Life(Life),
}

impl Game {
    pub fn kind(&self) -> GameKind {
        match self {
            Game::Minesweeper(_) => GameKind::Minesweeper,
            Game::Life(_) => GameKind::Life,
        }
    }

    pub fn view(&self) -> View {
        match self {
            Game::Minesweeper(board) => board.grid().view(),
            Game::Life(life) => life.grid.view(),
        }
    }

    /// Board size in cells as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Game::Minesweeper(board) => (board.grid().width(), board.grid().height()),
            Game::Life(life) => (life.grid.width(), life.grid.height()),
        }
    }

    fn set_view(&mut self, view: View) {
        match self {
            Game::Minesweeper(board) => board.set_view(view),
            Game::Life(life) => life.grid.set_view(view),
        }
    }
}

fn view_from(config: ViewConfig) -> View {
    View::new(0, 0, config.cell_width, config.cell_height)
}

/// Main application state
pub struct App {
    pub game: Game,
    pub show_help: bool,
    pub should_quit: bool,
    /// Visible board area; clicks outside it never reach the game
    canvas: Option<Rect>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut rng = match config.minesweeper.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = match config.game {
            GameKind::Minesweeper => {
                let ms = &config.minesweeper;
                let board = match &ms.layout {
                    Some(positions) => Minesweeper::with_mines(ms.width, ms.height, positions),
                    None => Minesweeper::new(ms.width, ms.height, ms.mines, &mut rng),
                };
                Game::Minesweeper(board)
            }
            GameKind::Life => {
                let lc = &config.life;
                let mut life = Life::new(lc.width, lc.height).with_speed(lc.speed, lc.speed_delta);
                if let Some(pattern) = lc.start_pattern {
                    life.place_pattern(pattern);
                }
                Game::Life(life)
            }
        };

        let view = match config.game {
            GameKind::Minesweeper => config.minesweeper.view,
            GameKind::Life => config.life.view,
        };
        game.set_view(view_from(view));

        let (width, height) = game.dimensions();
        log::info!("Starting {} on a {}x{} board", config.game.name(), width, height);

        Self {
            game,
            show_help: false,
            should_quit: false,
            canvas: None,
            rng,
        }
    }

    /// Anchor the board at the top-left corner of the canvas area.
    /// Cells start one position past the view offset.
    pub fn layout(&mut self, canvas: Rect) {
        self.canvas = Some(canvas);
        let view = self.game.view();
        self.game.set_view(View::new(
            canvas.x as i32 - 1,
            canvas.y as i32 - 1,
            view.cell_width,
            view.cell_height,
        ));
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn on_canvas(&self, x: i32, y: i32) -> bool {
        match self.canvas {
            Some(canvas) => {
                x >= canvas.left() as i32
                    && x < canvas.right() as i32
                    && y >= canvas.top() as i32
                    && y < canvas.bottom() as i32
            }
            None => true,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                self.should_quit = true;
                return;
            }
            InputEvent::Key('h') | InputEvent::Key('?') => {
                self.toggle_help();
                return;
            }
            _ => {}
        }
        if self.show_help {
            return;
        }
        if let InputEvent::Click { x, y, .. } = event {
            // Cells past the canvas edge are clipped and cannot be seen
            if !self.on_canvas(x, y) {
                return;
            }
        }

        match &mut self.game {
            Game::Minesweeper(board) => match event {
                InputEvent::Click { x, y, .. } => {
                    if let Some((row, col)) = board.grid().cell_at(x, y) {
                        board.on_click(row, col);
                    }
                }
                InputEvent::Key('r') => board.reset(&mut self.rng),
                _ => {}
            },
            Game::Life(life) => match event {
                InputEvent::Click {
                    x,
                    y,
                    button: PointerButton::Left,
                } => {
                    if let Some((row, col)) = life.grid.cell_at(x, y) {
                        life.on_click(row, col);
                    }
                }
                InputEvent::Click {
                    button: PointerButton::Right,
                    ..
                }
                | InputEvent::Key(' ') => life.toggle_running(),
                InputEvent::Wheel(WheelDirection::Up) | InputEvent::Key('+') | InputEvent::Key('=') => {
                    life.increase_speed()
                }
                InputEvent::Wheel(WheelDirection::Down) | InputEvent::Key('-') | InputEvent::Key('_') => {
                    life.decrease_speed()
                }
                InputEvent::Key('n') => life.step_once(),
                InputEvent::Key('c') => life.clear(),
                InputEvent::Key('p') => {
                    life.place_pattern(life.pattern);
                }
                InputEvent::Key(']') => life.pattern = life.pattern.next(),
                InputEvent::Key('[') => life.pattern = life.pattern.prev(),
                _ => {}
            },
        }
    }

    /// Advance one frame; only Life has time-based behavior.
    /// Returns true when the board changed.
    pub fn tick(&mut self) -> bool {
        match &mut self.game {
            Game::Life(life) => life.tick(),
            Game::Minesweeper(_) => false,
        }
    }
}
