//! Product Status Board Backend
//!
//! Layered architecture:
//! - domain: Board entities, list payload translation, errors
//! - graphql: Documents and HTTP client for the admin API
//! - repository: Remote catalogue access behind the ProductApi trait
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod graphql;
mod repository;

use config::BoardConfig;
use graphql::GraphQlClient;
use repository::{GraphQlProductApi, ProductRepository};

/// Application state shared across commands
pub struct AppState {
    pub products: ProductRepository,
    pub config: BoardConfig,
}

impl AppState {
    pub fn from_config(config: BoardConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let client = GraphQlClient::new(&config)?;
        let api = Arc::new(GraphQlProductApi::new(client));
        Ok(Self {
            products: ProductRepository::new(api),
            config,
        })
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "ProductStatusBoard")
                .map_err(|e| format!("failed to init rolling logger: {:?}", e))?;
            let _ = rolling_logger::info("Product Status Board starting");

            let config_dir = app_handle.path().app_config_dir()?;
            let config = BoardConfig::load(&config_dir)?;
            log::info!(
                "Board config loaded from {}: api_url={}, low_stock_threshold={}",
                config_dir.display(),
                config.api_url,
                config.low_stock_threshold
            );

            app.manage(AppState::from_config(config)?);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_products,
            commands::update_product_enabled,
            commands::open_product_detail,
            commands::get_board_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
