//! Board Settings Command

use tauri::State;

use crate::config::BoardSettings;
use crate::AppState;

/// Thresholds and defaults the frontend needs at startup
#[tauri::command]
pub fn get_board_settings(state: State<'_, AppState>) -> BoardSettings {
    state.config.settings()
}
