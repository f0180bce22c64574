// Terminal application state and input handling
pub mod app;

// Command-line and environment configuration
pub mod config;

// Gemini implementation of the Analyzer capability
pub mod gemini;

// Log file subscriber
pub mod logging;

// Quiz engine
pub mod quiz;

// Screen state machine
pub mod session;

// ratatui renderers
pub mod ui;

// Local document loading
pub mod upload;
