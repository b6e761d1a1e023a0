//! Click Demo Library
//!
//! Two buttons in a native GPUI window: one raises an alert on click, the
//! other counts its own clicks.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod theme;
pub mod utils;
