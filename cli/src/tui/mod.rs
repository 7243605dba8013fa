//! Interactive terminal UI: ingredient selection, generation progress,
//! and plan browsing.

pub mod app;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use prepplate_core::ai::AiClient;

use app::{App, Screen};

/// Launch the planner UI with the given client.
pub async fn run(client: Arc<dyn AiClient>) -> Result<()> {
    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(120);

    loop {
        app.poll_generation();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key.code, key.modifiers);
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Selection => match code {
            KeyCode::Char('q') | KeyCode::Esc => app.navigate_back(),
            KeyCode::Tab => app.next_category(),
            KeyCode::BackTab => app.prev_category(),
            KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
            KeyCode::Char(' ') => app.toggle_under_cursor(),
            KeyCode::Char('a') => app.auto_fill_focused(),
            KeyCode::Char('g') | KeyCode::Enter => app.start_generation(),
            _ => {}
        },
        Screen::Generating => {
            if code == KeyCode::Char('q') {
                app.should_quit = true;
            }
        }
        Screen::Results => match code {
            KeyCode::Char('q') | KeyCode::Esc => app.navigate_back(),
            KeyCode::Tab => app.toggle_results_tab(),
            KeyCode::Char('j') | KeyCode::Down => match app.results_tab {
                app::ResultsTab::Weekly => app.move_meal_cursor(1),
                app::ResultsTab::WeekendPrep => app.scroll(1),
            },
            KeyCode::Char('k') | KeyCode::Up => match app.results_tab {
                app::ResultsTab::Weekly => app.move_meal_cursor(-1),
                app::ResultsTab::WeekendPrep => app.scroll(-1),
            },
            KeyCode::Enter => app.open_detail(),
            KeyCode::Char('s') => app.start_over(),
            _ => {}
        },
        Screen::RecipeDetail => match code {
            KeyCode::Char('q') | KeyCode::Esc => app.navigate_back(),
            KeyCode::Char('j') | KeyCode::Down => app.scroll(1),
            KeyCode::Char('k') | KeyCode::Up => app.scroll(-1),
            _ => {}
        },
    }
}
