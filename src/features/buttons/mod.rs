//! Buttons Feature
//!
//! The alert button, the counter button, and the page hosting them.

pub mod click_button;
pub mod controller;
pub mod count_button;
pub mod page;
