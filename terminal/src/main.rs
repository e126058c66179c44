//! Native entry point: logging, theme, window, app.

use mint_terminal::{debug, App};

fn main() -> eframe::Result<()> {
    debug::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([400.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Drop Mint Terminal",
        options,
        Box::new(|cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            mint_terminal::ui::theme::Theme::apply(&cc.egui_ctx);

            let app = App::new();
            app.start();
            Ok(Box::new(app))
        }),
    )
}
