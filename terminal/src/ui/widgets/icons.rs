//! # Icons Helper Module
//!
//! Material Design icon glyphs and colored render helpers used throughout
//! the mint terminal.

use egui::{Color32, RichText};

use crate::ui::theme::Theme;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const XLARGE: f32 = 48.0;
}

/// Material Design Icons
pub mod material {
    /// Wallet icon
    pub const WALLET: &str = "\u{e227}"; // account_balance_wallet
    /// Diamond icon (mint button)
    pub const DIAMOND: &str = "\u{ead5}"; // diamond
    /// Close icon
    pub const CLOSE: &str = "\u{e5cd}"; // close
    /// Check/Success icon
    pub const CHECK: &str = "\u{e5ca}"; // check
    /// Error icon
    pub const ERROR: &str = "\u{e000}"; // error
    /// Info icon
    pub const INFO: &str = "\u{e88e}"; // info
    /// Network/Connection icon
    pub const NETWORK: &str = "\u{e1be}"; // network_check
    /// Token/Coin icon
    pub const TOKEN: &str = "\u{e227}"; // account_balance
}

/// Colored icon render helpers
pub struct Icons;

impl Icons {
    fn icon(glyph: &str, icon_size: f32, color: Color32) -> RichText {
        RichText::new(glyph).size(icon_size).color(color)
    }

    pub fn icon_success(glyph: &str, icon_size: f32) -> RichText {
        Self::icon(glyph, icon_size, Theme::default().success)
    }

    pub fn icon_error(glyph: &str, icon_size: f32) -> RichText {
        Self::icon(glyph, icon_size, Theme::default().error)
    }

    pub fn icon_info(glyph: &str, icon_size: f32) -> RichText {
        Self::icon(glyph, icon_size, Theme::default().selected)
    }

    pub fn icon_dim(glyph: &str, icon_size: f32) -> RichText {
        Self::icon(glyph, icon_size, Theme::default().dim)
    }
}
