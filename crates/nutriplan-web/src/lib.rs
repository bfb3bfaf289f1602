//! NutriPlan Web - Browser Meal Planner
//!
//! WebAssembly front end for the NutriPlan service. Collects the query,
//! calorie target and dietary preferences, asks the server for a day's meal
//! plan and renders it as cards, with PDF export and link sharing.

mod app;
mod browser;
mod components;
mod http;
mod state;

use nutriplan_core::config::CLIENT_CONFIG;
use wasm_bindgen::prelude::*;

/// Initialize the web application
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    for warning in &CLIENT_CONFIG.warnings {
        log::warn!("{}", warning);
    }

    log::info!("NutriPlan starting...");

    sycamore::render(app::App);

    log::info!("NutriPlan initialized");
}
