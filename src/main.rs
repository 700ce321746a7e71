//! AirSense
//!
//! Air quality prediction frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Sensor reading entry form (pollutants + weather)
//! - AQI prediction via the AirSense prediction service
//! - Color-coded severity display with pollutant bar chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the prediction service via HTTP.

use leptos::*;

mod api;
mod app;
mod aqi;
mod components;
mod state;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
