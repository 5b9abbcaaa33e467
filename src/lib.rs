//! Mem8 Explorer front-end core: retro font selection from browser signals
//! and a persisted visual theme.

pub mod app;
pub mod cli;

pub use app::*;
