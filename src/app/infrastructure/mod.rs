//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Key/value storage (memory, file, browser)
//! - Page bindings (headless, browser document)
//! - Host platform signals
//! - Error types

pub mod error;
pub mod page;
pub mod platform;
pub mod storage;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
