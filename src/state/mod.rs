//! State Management
//!
//! Global application state shared through the component tree.

pub mod global;

pub use global::{provide_global_state, GlobalState, Prediction, SensorReading};
