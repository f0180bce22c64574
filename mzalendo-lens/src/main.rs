use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use mzalendo_lens::app::App;
use mzalendo_lens::config::LensConfig;
use mzalendo_lens::gemini::{GeminiAnalyzer, GeminiSettings};
use mzalendo_lens::logging;
use mzalendo_lens::ui::ui;

fn main() -> Result<()> {
    let config = LensConfig::load()?;
    logging::init(&config.log_file, &config.log_level)?;

    info!(
        model = %config.model,
        cardinality = %config.cardinality,
        log_file = %config.log_file.display(),
        "starting mzalendo-lens"
    );
    if config.api_key.is_none() {
        warn!("no API key configured; analysis will fail until GEMINI_API_KEY is set");
    }

    // Background work (analysis calls, reveal timers) runs here
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let analyzer = Arc::new(GeminiAnalyzer::new(GeminiSettings::from(&config))?);
    let mut app = App::new(config, analyzer, runtime.handle().clone());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    runtime.shutdown_timeout(Duration::from_millis(200));

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }
    info!("mzalendo-lens exited");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.drain_commands();
        app.tick();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
