//! Cellplot - compose charts from cells in the terminal.

use anyhow::Result;
use cellplot::app::{App, Theme};
use cellplot::form::Pane;
use cellplot::{logging, ui};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "cellplot", version)]
#[command(about = "Compose plot, scatter, bar, histogram and pie cells into one figure", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        logging::init(log_path)?;
        tracing::info!("Starting Cellplot");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.theme.into());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{:#}", err);
        eprintln!("Error: {}", err);
    }

    tracing::info!("Cellplot exited");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Figure overlay - any close key returns to the cells
        if app.figure_visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                app.close_figure();
            }
            continue;
        }

        // Text editing - keys go to the editor
        if app.form.editor.is_active() {
            handle_edit_key(&mut app, key);
            continue;
        }

        if !handle_key(&mut app, key) {
            return Ok(());
        }
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.form.editor.backspace(),
        KeyCode::Char(c) => app.form.editor.input(c),
        _ => {},
    }
}

/// Handle a key in normal mode. Returns `false` to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return false,

        // Panes
        (KeyModifiers::NONE, KeyCode::Tab) => app.next_pane(),
        (_, KeyCode::BackTab) => app.prev_pane(),

        // Navigation
        (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            app.move_left()
        },
        (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.move_right()
        },
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.move_up()
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.move_down()
        },

        // Editing
        (KeyModifiers::NONE, KeyCode::Enter) => app.activate(),
        (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => app.step_focused(true),
        (_, KeyCode::Char('-')) => app.step_focused(false),

        // Cells
        (KeyModifiers::NONE, KeyCode::Char('a')) => app.create_cell(),
        (KeyModifiers::NONE, KeyCode::Char('d')) | (KeyModifiers::NONE, KeyCode::Delete) => {
            if app.form.pane == Pane::Cells {
                app.delete_focused_cell();
            }
        },
        (KeyModifiers::SHIFT, KeyCode::Char('C')) => app.clear_cells(),

        // Features
        (KeyModifiers::NONE, KeyCode::Char('p')) => app.render(),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

        _ => {},
    }
    true
}
