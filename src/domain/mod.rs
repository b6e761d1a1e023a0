//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI.

pub mod alert;
pub mod counter;
pub mod settings;
