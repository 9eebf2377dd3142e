//! Library exports for the rastergrid subsystems.
//!
//! Exposes the rasterization algorithms, the interaction state machine and
//! the headless replay backend so integration tests and external tools can
//! drive them without going through the CLI.

pub mod backend;
pub mod compare;
pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
