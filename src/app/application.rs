//! Application - Startup and Page Wiring
//!
//! Loads settings, builds the backend client, and runs the create study
//! group page on the terminal.

use std::io;

use tracing::{info, warn};

use crate::app::navigation::{HistoryRouter, Route};
use crate::error::Result;
use crate::eventing::NoticeQueue;
use crate::features::create_group::{CreateGroupController, CreateGroupPage, PageExit};
use crate::i18n::t;
use crate::services::HttpStudyGroupApi;
use crate::states::AppState;

/// Load persisted settings, falling back to defaults when unreadable
fn load_state() -> AppState {
    match AppState::try_load() {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            let mut state = AppState::new();
            state.apply_env_override(std::env::var(crate::constants::API_URL_ENV).ok());
            state
        }
    }
}

/// Run the Tutor Desk client
pub fn run_app() -> Result<PageExit> {
    let state = load_state();
    let locale = state.locale();

    let api = HttpStudyGroupApi::new(state.api())?;
    info!(
        endpoint = api.url(),
        locale = locale.display_name(),
        "Create study group page ready"
    );

    let mut controller = CreateGroupController::new(
        api,
        NoticeQueue::new(),
        HistoryRouter::new(Route::CreateStudyGroup),
        locale,
    );

    println!("{}", t(locale, "app-title"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut page = CreateGroupPage::new(stdin.lock(), stdout.lock());
    let exit = page.run(&mut controller)?;

    info!(exit = ?exit, "Create study group page closed");
    Ok(exit)
}
