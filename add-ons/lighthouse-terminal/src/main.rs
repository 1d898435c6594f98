//! lighthouse-terminal: the operator-facing command terminal.
//!
//! Renders the tactical dashboard, the mission board, and the transcript,
//! then loops on operator input. Plain text is submitted to the controller;
//! slash commands drive the presentation layer:
//!
//! ```text
//! /dash              redraw dashboard, missions, and transcript
//! /sort <key>        re-sort the mission board (status | type | progress)
//! /purge             wipe all persisted state (asks for confirmation)
//! /quit              exit
//! ```

mod render;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use lighthouse_core::{
    CommandCenter, GeminiOracle, HeuristicExtractor, LighthouseConfig, MissionSortKey,
    StateStore, SubmitOutcome,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = LighthouseConfig::load()?;
    let api_key = config.resolve_api_key().unwrap_or_else(|| {
        // Startup is allowed without a key; every oracle call will then fail
        // into the in-transcript failure notice.
        tracing::warn!("no oracle API key configured (GEMINI_API_KEY / API_KEY)");
        String::new()
    });

    let store = StateStore::open_path(Path::new(&config.storage_path).join("lighthouse_state"))?;
    let oracle = Arc::new(GeminiOracle::new(api_key, config.model.clone()));
    let mut center = CommandCenter::new(store, oracle, Box::new(HeuristicExtractor));

    let mut sort_key = MissionSortKey::default();
    render::render_full(&config.app_name, center.state(), sort_key);

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("▸")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            "/quit" | "/exit" => break,
            "/dash" => render::render_full(&config.app_name, center.state(), sort_key),
            "/purge" => {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("INITIATE TOTAL SYSTEM PURGE? (Wipe all data)")
                    .default(false)
                    .interact()?;
                if confirmed {
                    center.purge()?;
                    render::render_full(&config.app_name, center.state(), sort_key);
                }
            }
            cmd if cmd.starts_with("/sort") => {
                match MissionSortKey::from_str(cmd.trim_start_matches("/sort")) {
                    Some(key) => {
                        sort_key = key;
                        render::render_missions(&center.state().missions, sort_key);
                    }
                    None => println!("  usage: /sort status | type | progress"),
                }
            }
            cmd if cmd.starts_with('/') => {
                println!("  unknown command: {} (try /dash, /sort, /purge, /quit)", cmd);
            }
            _ => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
                spinner.set_message("Processing...");
                spinner.enable_steady_tick(Duration::from_millis(120));

                let outcome = center.submit(&line).await;

                spinner.finish_and_clear();
                if outcome == SubmitOutcome::Completed {
                    // Echo the exchange: the optimistic user turn and the reply.
                    let history = &center.state().history;
                    for msg in history.iter().rev().take(2).rev() {
                        render::render_message(msg);
                    }
                    render::render_dashboard(&center.state().metrics);
                }
            }
        }
    }

    Ok(())
}
