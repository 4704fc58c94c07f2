use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use pagewire_core::AppConfig;
use pagewire_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{
        EventLogWidget, FaqWidget, LoaderWidget, MediaWidget, NavBarWidget, PopupWidget,
        StatusBarWidget, TabGroupWidget,
    },
};

pub fn run(config: &AppConfig) -> Result<()> {
    // Build the page before touching the terminal so config errors print normally
    let mut app = App::new(config)?;
    let event_handler = EventHandler::from_config(&config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pagewire"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| draw(frame, app))?;

        // Poll at frame rate while anything on the page is moving
        if let Some(event) = event_handler.next(app.needs_frame())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    handle_action(app, action);
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::Select => app.select(),
        Action::Close => app.close(),
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ToggleHelp | Action::ExitMode => app.toggle_help(),
        Action::None => {}
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Nav bar, page body, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
        .split(body[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(body[1]);

    NavBarWidget::render(frame, main_layout[0], app);
    TabGroupWidget::render(frame, top[0], app);
    FaqWidget::render(frame, top[1], app);
    MediaWidget::render(frame, bottom[0], app);
    EventLogWidget::render(frame, bottom[1], app);
    StatusBarWidget::render(frame, main_layout[2], app);

    // Overlays
    PopupWidget::render_modal(frame, app);
    LoaderWidget::render(frame, size, app);
    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, app);
    }
}
