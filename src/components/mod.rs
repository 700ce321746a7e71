//! UI Components
//!
//! Leptos components for the prediction page.

pub mod chart;
pub mod header;
pub mod loading;
pub mod prediction_form;
pub mod result_display;

pub use chart::PollutantChart;
pub use header::Header;
pub use loading::InlineLoading;
pub use prediction_form::PredictionForm;
pub use result_display::ResultDisplay;
