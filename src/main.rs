use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keyword_board::app::{App, InputMode, Screen};
use keyword_board::config::Config;
use keyword_board::data::{Item, load_dataset};
use keyword_board::{logging, render, ui};
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "keyword-board")]
#[command(about = "Browse ranked keyword and news items by topic and period", long_about = None)]
struct Cli {
    /// Data file written by the batch job (data.js or a JSON array)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Topic to preselect
    #[arg(short, long)]
    topic: Option<String>,

    /// Period to preselect: today, 3days, 1week, 1month
    #[arg(short, long)]
    period: Option<String>,

    /// Print the filtered table body as HTML and exit
    #[arg(long)]
    html: bool,
}

async fn load_items(path: &Path) -> Option<Vec<Item>> {
    match load_dataset(path).await {
        Ok(items) => Some(items),
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "data file not found; keyword data not loaded");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "keyword data not loaded");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    if let Err(e) = logging::init(&Config::config_dir()?, &config.log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    let data_path = cli.data.clone().unwrap_or_else(|| config.data_file());
    let dataset = load_items(&data_path).await;

    let mut app = App::new(config, dataset)?;
    if let Some(topic) = &cli.topic {
        if !app.preselect_topic(topic) {
            warn!(topic = %topic, "unknown topic; keeping default");
        }
    }
    if let Some(period) = &cli.period {
        if !app.preselect_period(period) {
            warn!(period = %period, "unknown period; keeping default");
        }
    }

    if cli.html {
        app.apply_search(&chrono::Local::now());
        print!("{}", render::to_html_rows(&app.table));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(items = app.dataset_len(), "starting");
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short timeout keeps the fade-out smooth
        let timeout = Duration::from_millis(50);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match app.screen {
                        Screen::Landing => match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('?') => app.show_help(),
                            KeyCode::Tab
                            | KeyCode::BackTab
                            | KeyCode::Up
                            | KeyCode::Down
                            | KeyCode::Char('k')
                            | KeyCode::Char('j') => app.toggle_focus(),
                            KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
                            KeyCode::Right | KeyCode::Char('l') => app.select_next(),
                            KeyCode::Char(c @ '1'..='9') => {
                                app.activate_in_focus(c as usize - '1' as usize)
                            }
                            KeyCode::Enter | KeyCode::Char('/') => app.search(),
                            _ => {}
                        },
                        Screen::Results => match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('?') => app.show_help(),
                            KeyCode::Esc | KeyCode::Char('b') => app.show_landing(),
                            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                            KeyCode::Enter => app.show_row_detail(),
                            KeyCode::Char('e') => app.start_export(),
                            _ => {}
                        },
                    },
                    InputMode::Help => match key.code {
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                        _ => {}
                    },
                    InputMode::RowDetail => match key.code {
                        KeyCode::Esc | KeyCode::Enter => app.close_row_detail(),
                        _ => {}
                    },
                    InputMode::ExportMenu => match key.code {
                        KeyCode::Esc => app.cancel_export(),
                        KeyCode::Up | KeyCode::Char('k') => app.export_menu_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.export_menu_down(),
                        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                            if app.export_menu_selection == 0 {
                                app.toggle_export_format();
                            }
                        }
                        KeyCode::Enter => app.confirm_export()?,
                        _ => {}
                    },
                }
            }
        }
    }
}
