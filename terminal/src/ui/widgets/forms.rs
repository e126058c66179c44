//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;

use crate::ui::theme::Theme;

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    _theme: &Theme,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let button_text = if let Some(icon) = icon {
        format!("{} {}", icon, text)
    } else {
        text.to_string()
    };

    let mut button = egui::Button::new(egui::RichText::new(button_text).size(16.0));

    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(24.0)
        .strong()
        .color(theme.selected);
    ui.label(heading);
    ui.add_space(20.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(10.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(14.0).color(theme.dim));
}

/// Render vertically centered content
pub fn render_centered<F>(ui: &mut egui::Ui, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        content(ui);
    });
}
