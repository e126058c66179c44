//! # Connect Screen
//!
//! Wallet connection screen: one button per connector entry point, plus
//! the pending/error states of an in-flight flow.

use egui;

use shared::dto::wallet::WalletConnector;

use crate::app::{App, AppState};
use crate::services::wallet::WalletStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::icons::{material, size, Icons};

const CONNECTORS: [WalletConnector; 3] = [
    WalletConnector::Extension,
    WalletConnector::Relay,
    WalletConnector::Exchange,
];

/// Render the connect screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    forms::render_centered(ui, |ui| {
        ui.label(Icons::icon_info(material::WALLET, size::XLARGE));
        ui.add_space(10.0);

        let drop_name = state
            .metadata
            .data
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("NFT Drop");
        forms::render_form_heading(ui, drop_name, &theme);
        forms::render_hint(ui, "Connect a wallet to mint", &theme);
        ui.add_space(20.0);

        match &state.wallet {
            WalletStatus::Connecting(connector) => {
                ui.spinner();
                ui.add_space(10.0);
                forms::render_hint(
                    ui,
                    &format!("Waiting for {} approval...", connector.label()),
                    &theme,
                );
            }
            status => {
                if let WalletStatus::Error(error) = status {
                    forms::render_error(ui, error, &theme);
                }
                render_connector_buttons(ui, app, &theme);
            }
        }
    });
}

fn render_connector_buttons(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        for connector in CONNECTORS {
            if forms::render_button(
                ui,
                connector.label(),
                Some(material::WALLET),
                theme,
                Some(theme.selected),
                Some(egui::vec2(220.0, 36.0)),
            )
            .clicked()
            {
                app.handle_connect_click(connector);
            }
            ui.add_space(8.0);
        }
    });
}
