// File: src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod network;
pub mod state;
pub mod view;

use crate::api::EventApi;
use crate::config::Config;
use crate::paths::AppPaths;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::{LevelFilter, WriteLogger};
use std::{
    fs,
    io::{self, Write},
    time::Duration,
};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    // Panic hook: the alternate screen swallows the default panic output.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("evlist_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    // File logging; the terminal belongs to ratatui once we enter raw mode.
    if let Ok(log_path) = AppPaths::get_log_file()
        && let Ok(file) = fs::File::create(&log_path)
    {
        let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
    }

    // --- 1. CONFIG / ONBOARDING ---
    let cfg = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            // If the error is NOT a missing config file, it's a syntax/permission
            // error. Report it and exit instead of treating it as a fresh install.
            if !Config::is_missing_config_error(&e) {
                eprintln!("Error loading configuration:\n{}", e);
                std::process::exit(1);
            }

            println!("Welcome to Evlist. No configuration file found.");
            print!("Backend base URL [http://localhost:3000]: ");
            io::stdout().flush()?;

            let mut url = String::new();
            io::stdin().read_line(&mut url)?;

            let mut new_config = Config::default();
            if !url.trim().is_empty() {
                new_config.url = url.trim().trim_end_matches('/').to_string();
            }

            if let Err(e) = new_config.save() {
                eprintln!("Warning: Could not save config file: {}", e);
            } else if let Ok(path) = Config::get_path_string() {
                println!("Configuration saved to: {}", path);
            }
            new_config
        }
    };

    log::info!("using backend at {}", cfg.url);
    let api = EventApi::new(&cfg.url, cfg.allow_insecure_certs)?;

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 3. STATE INIT ---
    let mut app_state = AppState::new();

    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- 4. NETWORK TASK ---
    tokio::spawn(network::run_network_actor(api, action_rx, event_tx));

    // --- 5. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Network events
        if let Ok(app_event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, app_event);
        }

        // B. Input events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Filter out KeyRelease events to prevent double input on Windows
            if key.kind == event::KeyEventKind::Release {
                continue;
            }

            if let Some(action) = handlers::handle_key_event(key, &mut app_state) {
                let quit = matches!(action, action::Action::Quit);
                let _ = action_tx.send(action).await;
                if quit {
                    break;
                }
            }
        }
    }

    // --- 6. CLEANUP ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
