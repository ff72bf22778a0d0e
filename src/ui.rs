use crate::app::{App, Game};
use crate::life::Life;
use crate::minesweeper::{MineCell, Minesweeper};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 22;

// UI color scheme
const BORDER_COLOR: Color = Color::Cyan;
const HIGHLIGHT_COLOR: Color = Color::Yellow;
const TEXT_COLOR: Color = Color::White;
const DIM_TEXT_COLOR: Color = Color::Gray;
const MINE_COLOR: Color = Color::Red;
const COUNT_COLOR: Color = Color::Green;
const ALIVE_COLOR: Color = Color::Green;
const EMPTY_COLOR: Color = Color::DarkGray;

/// Creates a standard styled block with rounded borders
fn styled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(title)
}

fn split(area: Rect) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);
    (layout[0], layout[1])
}

/// Area inside the board frame where cells are drawn
pub fn canvas_area(frame_area: Rect) -> Rect {
    let (_, canvas) = split(frame_area);
    styled_block("").inner(canvas)
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (sidebar, canvas) = split(area);

    render_sidebar(frame, sidebar, app);
    render_canvas(frame, canvas, app);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Status
            Constraint::Min(6),    // Controls
        ])
        .split(area);

    render_status_box(frame, sections[0], app);
    render_controls_box(frame, sections[1], app);
}

fn status_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(DIM_TEXT_COLOR)),
        Span::styled(value, Style::default().fg(TEXT_COLOR)),
    ])
}

fn render_status_box(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" {} ", app.game.kind().name());
    let block = styled_block(&title);

    let content = match &app.game {
        Game::Minesweeper(board) => {
            let safe = board.grid().len() - board.mine_count();
            let (status, color) = if board.is_cleared() {
                ("CLEARED", Color::Green)
            } else {
                ("PLAYING", BORDER_COLOR)
            };
            vec![
                status_line("Mines", board.mine_count().to_string()),
                status_line("Opened", format!("{} / {}", board.opened_count(), safe)),
                Line::from(""),
                Line::from(Span::styled(status, Style::default().fg(color))),
            ]
        }
        Game::Life(life) => {
            let (status, color) = if life.is_running {
                ("RUNNING", BORDER_COLOR)
            } else {
                ("PAUSED", HIGHLIGHT_COLOR)
            };
            vec![
                status_line("Generation", life.generation.to_string()),
                status_line("Population", life.population().to_string()),
                status_line("Speed", life.speed.to_string()),
                status_line("Pattern", life.pattern.name().to_string()),
                Line::from(Span::styled(status, Style::default().fg(color))),
            ]
        }
    };

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

fn render_controls_box(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(HIGHLIGHT_COLOR);
    let desc_style = Style::default().fg(DIM_TEXT_COLOR);

    let make_control = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:>5}", key), key_style),
            Span::styled(format!(" {}", desc), desc_style),
        ])
    };

    let mut content = match &app.game {
        Game::Minesweeper(_) => vec![
            make_control("Click", "open cell"),
            make_control("R", "restart"),
        ],
        Game::Life(_) => vec![
            make_control("Click", "toggle cell"),
            make_control("Space", "run/pause"),
            make_control("RClk", "run/pause"),
            make_control("Wheel", "speed"),
            make_control("+/-", "speed"),
            make_control("N", "step"),
            make_control("C", "clear"),
            make_control("[/]", "pattern"),
            make_control("P", "place pattern"),
        ],
    };
    content.push(make_control("H", "help"));
    content.push(make_control("Q", "quit"));

    let paragraph = Paragraph::new(content).block(styled_block(" Controls "));
    frame.render_widget(paragraph, area);
}

fn render_canvas(frame: &mut Frame, area: Rect, app: &App) {
    let block = styled_block("");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    match &app.game {
        Game::Minesweeper(board) => draw_minesweeper(buf, inner, board),
        Game::Life(life) => draw_life(buf, inner, life),
    }
}

/// Write one board cell, clipped to the canvas
fn draw_cell(buf: &mut Buffer, clip: Rect, origin: (i32, i32), size: (u16, u16), text: &str, style: Style) {
    let (x0, y0) = origin;
    let (width, height) = size;
    let label = format!("{:^width$}", text, width = width as usize);
    let blank = " ".repeat(width as usize);

    for dy in 0..height as i32 {
        let y = y0 + dy;
        if y < clip.top() as i32 || y >= clip.bottom() as i32 {
            continue;
        }
        let line = if dy == (height as i32 - 1) / 2 { &label } else { &blank };
        for (dx, ch) in line.chars().enumerate() {
            let x = x0 + dx as i32;
            if x < clip.left() as i32 || x >= clip.right() as i32 {
                continue;
            }
            buf.set_string(x as u16, y as u16, ch.to_string(), style);
        }
    }
}

fn draw_minesweeper(buf: &mut Buffer, clip: Rect, board: &Minesweeper) {
    let view = board.grid().view();
    let size = (view.cell_width, view.cell_height);
    for ((row, col), cell) in board.grid().iter() {
        let origin = view.cell_origin(row, col);
        match cell {
            MineCell::Mine => draw_cell(buf, clip, origin, size, "", Style::default().bg(MINE_COLOR)),
            MineCell::Unopened => {
                draw_cell(buf, clip, origin, size, "·", Style::default().fg(EMPTY_COLOR))
            }
            MineCell::Opened(count) => draw_cell(
                buf,
                clip,
                origin,
                size,
                &count.to_string(),
                Style::default().fg(COUNT_COLOR),
            ),
        }
    }
}

fn draw_life(buf: &mut Buffer, clip: Rect, life: &Life) {
    let view = life.grid.view();
    let size = (view.cell_width, view.cell_height);
    for ((row, col), &alive) in life.grid.iter() {
        let origin = view.cell_origin(row, col);
        if alive {
            draw_cell(buf, clip, origin, size, "", Style::default().bg(ALIVE_COLOR));
        } else {
            draw_cell(buf, clip, origin, size, "·", Style::default().fg(EMPTY_COLOR));
        }
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let canvas_width = area.width.saturating_sub(SIDEBAR_WIDTH);
    let help_width = 50.min(canvas_width.saturating_sub(4));
    let help_height = area.height.saturating_sub(4).min(20);
    let x = SIDEBAR_WIDTH + (canvas_width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let heading = Style::default().fg(BORDER_COLOR);
    let content = match &app.game {
        Game::Minesweeper(_) => vec![
            Line::from(""),
            Line::from(Span::styled("MINESWEEPER", heading)),
            Line::from(""),
            Line::from("Mines are shown in red. Click a cell to open it: it shows how many of its eight neighbors are mines."),
            Line::from(""),
            Line::from("Opening a cell with no adjacent mines opens the whole empty region around it, stopping at cells that touch a mine."),
            Line::from(""),
            Line::from("R=Restart (a random board gets new mines, a fixed layout keeps them), H=Close help, Q=Quit"),
        ],
        Game::Life(_) => vec![
            Line::from(""),
            Line::from(Span::styled("CONWAY'S GAME OF LIFE", heading)),
            Line::from(""),
            Line::from("A live cell with two or three live neighbors survives; a dead cell with exactly three comes alive. Edges wrap around."),
            Line::from(""),
            Line::from("Click cells to toggle them while paused. Speed is the number of frames between generations."),
            Line::from(""),
            Line::from("Space/Right click=Run, Wheel or +/-=Speed, N=Step, C=Clear, [/]=Pattern, P=Place, Q=Quit"),
        ],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(HIGHLIGHT_COLOR))
        .title(" Help (H to close) ");

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, help_area);
}
