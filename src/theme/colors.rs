//! Colors - Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct AppColors;

impl AppColors {
    /// Header background - Teal
    pub fn header_bg() -> Rgba { rgb(0x2cb3b8) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0xf5c518) }
    pub fn button_primary_hover() -> Rgba { rgba(0xd4a817ff) }
    pub fn button_primary_text() -> Rgba { rgb(0x1f2937) }
    pub fn button_secondary_bg() -> Rgba { rgba(0xe5e7ebff) }
    pub fn button_secondary_hover() -> Rgba { rgba(0xd1d5dbff) }
    pub fn close_hover() -> Rgba { rgba(0xf3f4f6ff) }

    /// Translucent white used on the header
    pub fn header_control_bg() -> Rgba { rgba(0xffffff22) }
    pub fn header_control_hover() -> Rgba { rgba(0xffffff44) }
}
