//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input mapping
//! - Web bindings for the host engine and DOM (wasm32 only)

pub mod input;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;
