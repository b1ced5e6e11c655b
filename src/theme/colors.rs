//! Colors - Beacon Theme Colors

use gpui::{Hsla, Rgba, rgb};

/// Beacon color palette - All colors are accessed via associated functions
pub struct BeaconColors;

impl BeaconColors {
    // Primary colors
    /// Header background - Deep indigo
    pub fn header_bg() -> Rgba { rgb(0x4338ca) }
    /// Primary accent - Indigo
    pub fn accent() -> Rgba { rgb(0x6366f1) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8fafc) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark slate
    pub fn log_panel_bg() -> Rgba { rgb(0x1e293b) }
    /// Search panel backdrop (translucent)
    pub fn backdrop() -> Rgba { Rgba { r: 0.06, g: 0.09, b: 0.16, a: 0.35 } }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x64748b) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x2563eb) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x6366f1) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x6366f1) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    /// Danger button text
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x64748b) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf1f5f9) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf1f5f9) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf8fafc) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x94a3b8) }
}

/// Convert Rgba to Hsla for certain GPUI operations
impl BeaconColors {
    pub fn accent_hsla() -> Hsla {
        Hsla::from(Self::accent())
    }
}
