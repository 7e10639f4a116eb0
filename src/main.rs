mod app;
mod event;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use keyladder::config::Config;
use keyladder::engine::level_table::level_name;

use app::{App, key_from_event};
use event::{AppEvent, EventHandler};
use ui::components::level_info::LevelInfo;
use ui::components::progress_bar::ProgressBar;
use ui::components::typing_area::TypingArea;
use ui::layout::AppLayout;
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "keyladder",
    version,
    about = "Terminal typing trainer that climbs a ladder of character sets"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short = 'n', long, help = "Number of letters per round")]
    letters: Option<usize>,

    #[arg(short, long, help = "Level to start from (1-based)")]
    level: Option<usize>,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Write the default config file and exit")]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.clone());

    if cli.init_config {
        let path = Config::config_path();
        Config::default().save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(letters) = cli.letters {
        config.letters_per_round = letters;
    }
    if let Some(level) = cli.level {
        config.start_level = level.saturating_sub(1);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    let table = config.validate()?;
    config.normalize(&table);

    let theme = Theme::load(&Config::config_dir().join("themes"), &config.theme).unwrap_or_default();
    tracing::info!(
        levels = table.len(),
        letters = config.letters_per_round,
        start = config.start_level,
        theme = %theme.name,
        "starting"
    );

    let mut app = App::new(&config, table, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_tracing(log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_file.or_else(|| {
        dirs::data_dir().map(|dir| dir.join("keyladder").join("keyladder.log"))
    });
    let file = path.as_ref().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    // The terminal belongs to the UI, so without a log file logging stays off.
    match file {
        Some(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
        }
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if handle_key(app, key) {
                    events.schedule(AppEvent::RoundComplete)?;
                }
            }
            AppEvent::RoundComplete => app.finish_round(),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Returns true when the key finished the round.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        app.should_quit = true;
        return false;
    }

    app.type_key(key_from_event(&key))
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let engine = &app.engine;

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let layout = AppLayout::new(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " keyladder ",
            Style::default()
                .fg(colors.bg())
                .bg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} of {}{} | {} letters per round | {:.0}% typed",
                level_name(engine.level()),
                engine.table().len(),
                if engine.is_last_level() { " (final)" } else { "" },
                engine.letters_per_round(),
                engine.round().progress() * 100.0
            ),
            Style::default().fg(colors.fg()),
        ),
    ]));
    frame.render_widget(header, layout.header);

    let markup = engine.markup();
    frame.render_widget(TypingArea::new(&markup, &app.theme), layout.typing);

    let descriptors = engine.descriptors();
    frame.render_widget(LevelInfo::new(&descriptors, &app.theme), layout.level_info);

    frame.render_widget(
        ProgressBar::new("Levels", engine.level() + 1, engine.table().len(), &app.theme),
        layout.progress,
    );

    let footer = match engine.last_result() {
        Some(result) if result.advanced => Span::styled(
            format!(
                " Clean round! Unlocked {} | [Esc] Quit ",
                level_name(engine.level())
            ),
            Style::default().fg(colors.success()),
        ),
        Some(result) if !result.is_clean() => Span::styled(
            format!(
                " Last round: {} errors, {:.0}% accuracy, repeat {} | [Esc] Quit ",
                result.error_count,
                result.accuracy(),
                level_name(result.level)
            ),
            Style::default().fg(colors.warning()),
        ),
        _ => Span::styled(
            " Type the highlighted letter, spaces are automatic | [Esc] Quit ",
            Style::default().fg(colors.text_pending()),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(footer)), layout.footer);
}
