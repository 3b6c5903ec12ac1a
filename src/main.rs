//! WTE Plant Simulator - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
pub mod constants;
mod logic;

use api::commands;

// --- Window Control Commands (Manual Implementation) ---
#[tauri::command]
async fn window_minimize(window: tauri::Window) {
    let _ = window.minimize();
}

#[tauri::command]
async fn window_toggle_maximize(window: tauri::Window) {
    if let Ok(is_max) = window.is_maximized() {
        if is_max {
            let _ = window.unmaximize();
        } else {
            let _ = window.maximize();
        }
    }
}

#[tauri::command]
async fn window_close(window: tauri::Window) {
    let _ = window.close();
}

#[tauri::command]
async fn window_start_drag(window: tauri::Window) {
    let _ = window.start_dragging();
}
// -----------------------------------------------------

fn main() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    // The artifact is the only external dependency of the whole pipeline.
    // Without it no AI-mode simulation is computable, so fail at startup
    // instead of surfacing broken predictions later.
    if let Err(e) = logic::model::inference::ensure_loaded() {
        log::error!("Yield model failed to load: {}", e);
        log::error!("Place the artifact at '{}' (or set WTE_MODEL_PATH) and restart.", constants::model_path());
        std::process::exit(1);
    }

    match logic::model::guard::verify_checksum() {
        Ok(true) => log::info!("Model checksum verified"),
        Ok(false) => log::warn!("Model checksum mismatch - artifact may be stale or tampered"),
        Err(e) => log::warn!("Model checksum not verified: {}", e),
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .invoke_handler(tauri::generate_handler![
            // Window Controls (Manual)
            window_minimize,
            window_toggle_maximize,
            window_close,
            window_start_drag,

            // Simulation Commands
            commands::run_simulation,
            commands::get_input_bounds,
            commands::get_default_input,

            // Model Commands
            commands::get_engine_status,
            commands::get_model_metadata,
            commands::is_model_loaded,
            commands::verify_model_checksum,
        ])
        .run(tauri::generate_context!())
        .expect("Failed to launch the Tauri application");
}
