//! Harmony command-line front-end
//!
//! Headless driver for the Harmony store: configuration, the per-session
//! [`AppContext`], route resolution and the view flows each screen of the
//! app would run.

pub mod config;
pub mod context;
pub mod navigation;
pub mod views;

pub use config::AppConfig;
pub use context::AppContext;
pub use navigation::{resolve, Route};
