//! # Mint Screen
//!
//! The minting page: drop metadata header, quantity selector, the single
//! call-to-action button, and the claimed/total supply readout.

use chrono::Utc;
use egui;

use shared::utils::truncate_address;

use crate::app::{App, AppState};
use crate::mint::label::mint_button_label;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::icons::{material, size, Icons};

/// Render the mint screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    // Metadata and supply pending (or failed) both degrade to the generic
    // loading state
    let (Some(metadata), Some(supply)) = (state.metadata.data.as_ref(), state.supply.data) else {
        forms::render_centered(ui, |ui| {
            ui.spinner();
            ui.add_space(10.0);
            forms::render_hint(ui, "Loading...", &theme);
        });
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        forms::render_form_heading(ui, &metadata.name, &theme);
        if let Some(description) = &metadata.description {
            forms::render_hint(ui, description, &theme);
        }
        ui.add_space(16.0);

        render_phase_status(ui, state, &theme);
        ui.add_space(12.0);

        render_mint_controls(ui, state, app, &theme);
        ui.add_space(16.0);

        // Supply readout
        ui.label(
            egui::RichText::new(format!("{} / {} claimed", supply.claimed, supply.total()))
                .color(theme.success),
        );

        ui.add_space(24.0);
        ui.separator();
        ui.add_space(8.0);
        render_session_footer(ui, state, app, &theme);
    });
}

/// Distinct "not live yet" messaging, kept apart from sold-out and price
/// states
fn render_phase_status(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let flags = state.flags();
    if flags.no_active_phase && !state.condition.loading {
        forms::render_hint(ui, "This drop is not live yet.", theme);
        return;
    }
    if let Some(condition) = state.active_condition() {
        if condition.start_time > Utc::now() {
            forms::render_hint(
                ui,
                &format!(
                    "Phase starts {}",
                    condition.start_time.format("%Y-%m-%d %H:%M UTC")
                ),
                theme,
            );
        }
    }
}

fn render_mint_controls(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let flags = state.flags();
    let upper = state.selector_upper_bound();
    let in_flight = state.mint.claim_in_flight;

    ui.horizontal(|ui| {
        // Keep the row centered: quantity input + button
        ui.add_space((ui.available_width() / 2.0 - 160.0).max(0.0));

        let mut quantity = state.mint.quantity;
        let selector = egui::DragValue::new(&mut quantity).range(1..=upper).speed(1);
        if ui.add_enabled(!in_flight, selector).changed() {
            app.handle_quantity_change(quantity);
        }

        let label = mint_button_label(
            &flags,
            state.active_condition(),
            state.eligibility_reasons(),
            state.mint.quantity,
        );
        // Disabled until the eligibility answer for this exact selection
        // has arrived; a claim must never race a stale check
        let enabled = flags.claimable && !in_flight && state.eligibility_current();
        let button = egui::Button::new(
            egui::RichText::new(format!("{} {}", material::DIAMOND, label)).size(16.0),
        )
        .fill(theme.selected)
        .min_size(egui::vec2(240.0, 32.0));

        if ui.add_enabled(enabled, button).clicked() {
            app.handle_mint_click();
        }
        if in_flight {
            ui.spinner();
        }
    });
}

fn render_session_footer(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(session) = state.session() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() / 2.0 - 140.0).max(0.0));
        ui.label(Icons::icon_dim(material::TOKEN, size::SMALL));
        ui.monospace(truncate_address(&session.address));
        forms::render_hint(ui, &format!("({})", session.cluster), theme);

        if forms::render_button(
            ui,
            "Disconnect",
            Some(material::CLOSE),
            theme,
            None,
            None,
        )
        .clicked()
        {
            app.handle_disconnect_click();
        }
    });
}
