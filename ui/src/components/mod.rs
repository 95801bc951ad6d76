//! Shared building blocks for the app shell and its screens.
pub mod pico;
pub mod status;
