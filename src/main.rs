use anyhow::Result;
use clap::Parser;

use specter::app::App;
use specter::cli::Cli;
use specter::config::{default_settings_path, Settings};
use specter::demo::DemoStore;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("specter");
    std::fs::create_dir_all(&log_dir)?;

    let filter = match &cli.log_filter {
        Some(filter) => tracing_subscriber::EnvFilter::new(filter),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };

    // Write to file; the terminal itself belongs to the TUI.
    let file_appender = tracing_appender::rolling::never(&log_dir, "specter.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let settings_path = cli.settings.unwrap_or_else(default_settings_path);
    let settings = Settings::load_or_create(&settings_path)?;

    let store = DemoStore::new(settings, settings_path);
    let mut app = App::new(store)?;
    let result = app.run();

    // Flush pending log lines on normal exit (panic hook handles panics)
    drop(guard);

    result
}
