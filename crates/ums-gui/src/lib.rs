//! User Management Studio - GUI Library
//!
//! This module exposes the application pieces for the binary and for testing.

pub mod app;
pub mod cli;
pub mod logging;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
