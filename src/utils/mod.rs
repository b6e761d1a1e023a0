//! Utilities

pub mod settings_store;
