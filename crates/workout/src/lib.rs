//! Workout library: application logic for the workout summary calculator.

pub mod app;
pub mod config;
pub mod errors;
