pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod notifier;
pub mod preview;
pub mod render;
pub mod tool;
