//! Main view - split panel with chat list and the active screen

use super::ActiveView;
use crate::coordinator::ViewCoordinator;
use crate::ui::theme::Palette;
use egui::Vec2;

/// Show the signed-in layout: chat list on the left, active screen on the right
pub fn show(coordinator: &mut ViewCoordinator, ctx: &egui::Context) {
    // Left panel - Chat list
    egui::SidePanel::left("chat_list_panel")
        .resizable(true)
        .default_width(320.0)
        .min_width(260.0)
        .max_width(420.0)
        .show(ctx, |ui| {
            super::chat_list::show(coordinator, ui);
        });

    // Right panel - whatever screen is active
    egui::CentralPanel::default().show(ctx, |ui| match coordinator.active() {
        ActiveView::ChatList => show_empty_state(ui),
        ActiveView::Chat(id) => super::chat_view::show(coordinator, ui, id),
        ActiveView::Call(_) => super::call::show(coordinator, ui),
        ActiveView::VideoCall(_) => super::video_call::show(coordinator, ui),
        ActiveView::Profile | ActiveView::Premium => super::profile::show(coordinator, ui),
        ActiveView::Stats => super::stats::show(coordinator, ui),
        ActiveView::Privacy => super::privacy::show(coordinator, ui),
    });

    if coordinator.active() == ActiveView::Premium {
        super::premium::show(coordinator, ctx);
    }
}

/// Show empty state when no chat is selected
fn show_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 48.0, Palette::PURPLE);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "💬",
            egui::FontId::proportional(40.0),
            egui::Color32::WHITE,
        );

        ui.add_space(16.0);
        ui.heading("Выберите чат");
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Начните общение с друзьями").color(Palette::TEXT_SECONDARY));
    });
}
