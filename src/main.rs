use std::io;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conway::ScreenSize;
use conway::board::Board;
use conway::camera::Camera;
use conway::camera::DOTS_X;
use conway::camera::DOTS_Y;
use conway::config;
use conway::driver::Driver;
use conway::driver::Mode;
use conway::events::Event;
use conway::render;
use conway::screen::Screen;

/// Puts the terminal in raw mode for as long as it lives, and restores it when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // nothing sensible left to do if restoring fails
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Everything that depends on the size of the terminal
struct View {
    cam: Camera,
    screen: Screen,
    cols: u16,
}

impl View {
    fn new(cols: u16, rows: u16) -> Self {
        // the last line is kept for the status bar
        let rows = rows.saturating_sub(1).max(1);

        let cam = Camera::for_terminal(cols, rows);
        let screen = Screen::new(
            (cols as usize * DOTS_X).min(ScreenSize::MAX as usize) as ScreenSize,
            (rows as usize * DOTS_Y).min(ScreenSize::MAX as usize) as ScreenSize,
            config::NUM_ROWS,
            config::NUM_COLS,
        );

        Self { cam, screen, cols }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they can be redirected away from the UI, e.g. `2>life.log`
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let _guard = TerminalGuard::enter().context("Failed to set up the terminal")?;

    run(&mut io::stdout())
}

fn run(stdout: &mut impl Write) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("Failed to read the terminal size")?;
    let mut view = View::new(cols, rows);

    let mut driver = Driver::new(Board::new(), Instant::now());
    let mut gridlines = true;

    info!(rows = config::NUM_ROWS, cols = config::NUM_COLS, "Painting");

    loop {
        // Poll event for as long as FRAMETIME
        let event = if event::poll(config::FRAMETIME)? {
            conway::io::convert_event(event::read()?)
        } else {
            None
        };

        let now = Instant::now();

        // Board errors are contract violations the board already logged, the UI keeps going
        match event {
            None => {}
            Some(Event::Exit) => break,
            Some(Event::Paint { x, y }) => {
                let _ = driver.paint(&view.screen, x, y);
            }
            Some(Event::Toggle) => {
                let _ = driver.toggle(now);
            }
            Some(Event::ToggleGridlines) => gridlines = !gridlines,
            Some(Event::Resize { cols, rows }) => {
                view = View::new(cols, rows);
                queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
            }
        }

        let _ = driver.tick(now);

        draw(stdout, &mut view, &driver, gridlines)?;
    }

    Ok(())
}

fn draw(
    stdout: &mut impl Write,
    view: &mut View,
    driver: &Driver,
    gridlines: bool,
) -> io::Result<()> {
    let board = driver.board();

    render::draw_board(&mut view.cam, &view.screen, &board.active_cells(), gridlines);

    queue!(stdout, cursor::MoveTo(0, 0))?;

    for line in view.cam.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let mode = match driver.mode() {
        Mode::Painting => "painting",
        Mode::Simulation => "running",
    };
    let status = format!(
        "{mode} | generation {} | population {} | enter: start/reset  g: gridlines  q: quit",
        board.generation(),
        board.population(),
    );
    let status: String = status.chars().take(view.cols as usize).collect();

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(status)
    )?;

    stdout.flush()
}
