//! # GUI Theme
//!
//! Dark mint-terminal theme for egui: near-black background, high-contrast
//! text, a single accent color for the call-to-action.

use egui::{Color32, Context, Stroke, Visuals};

/// Color roles used by screens and widgets
#[derive(Clone)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Normal text color
    pub normal: Color32,
    /// Accent for the primary action and highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(10, 10, 12),
            normal: Color32::from_rgb(235, 235, 235),
            selected: Color32::from_rgb(40, 110, 255),
            border: Color32::from_rgb(51, 51, 51),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(0, 200, 90),
            error: Color32::from_rgb(235, 60, 60),
            warning: Color32::from_rgb(255, 170, 0),
        }
    }
}

impl Theme {
    /// Install the theme into the egui context. Called once at startup.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.background;
        visuals.override_text_color = Some(theme.normal);
        visuals.selection.bg_fill = theme.selected;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_fill = Color32::from_rgb(26, 26, 30);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(38, 38, 44);
        visuals.widgets.active.bg_fill = theme.selected;

        ctx.set_visuals(visuals);
    }
}
