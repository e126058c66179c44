//! # GUI Rendering Framework
//!
//! This module orchestrates the UI rendering pipeline using egui widgets.
//!
//! Rendering works from a cloned state snapshot so the lock is never held
//! while widgets run; user actions call back into the [`App`] handler
//! facade, which hands the slow work to async tasks.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::App;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            // Lock held by a task; skip this frame
            None => return,
        }
    };

    // Window title follows the drop once its metadata is in
    let title = match state.metadata.data.as_ref() {
        Some(metadata) => format!("{} - {}", metadata.name, state.current_screen.title()),
        None => state.current_screen.title().to_string(),
    };
    ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));

    egui::CentralPanel::default().show(ctx, |ui| {
        // No session means connector actions, whatever screen was current
        if state.wallet.is_connected() {
            screens::mint::render(ui, &state, app);
        } else {
            screens::connect::render(ui, &state, app);
        }
    });
}
