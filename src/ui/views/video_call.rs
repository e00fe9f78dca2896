//! Video call screen

use super::call::control_button;
use crate::coordinator::ViewCoordinator;
use crate::ui::components::avatar::{color_from_key, Avatar};
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let Some(session) = coordinator.call() else {
        return;
    };
    let chat_id = session.chat_id;
    let duration = session.duration();
    let controls = session.controls;

    let (name, glyph) = coordinator
        .store()
        .chat(chat_id)
        .map(|chat| (chat.name.clone(), chat.avatar.clone()))
        .unwrap_or_default();

    let full = ui.available_rect_before_wrap();
    let painter = ui.painter_at(full);
    painter.rect_filled(full, Rounding::ZERO, Color32::BLACK);

    // Remote peer placeholder
    let peer_center = full.center() - Vec2::new(0.0, 40.0);
    painter.circle_filled(peer_center, 80.0, color_from_key(&name));
    painter.text(
        peer_center,
        egui::Align2::CENTER_CENTER,
        &glyph,
        egui::FontId::proportional(48.0),
        Color32::WHITE,
    );

    // Self preview in the top-right corner
    let preview = egui::Rect::from_min_size(
        full.right_top() + Vec2::new(-196.0, 16.0),
        Vec2::new(180.0, 240.0),
    );
    painter.rect_filled(preview, Rounding::same(12.0), Palette::DARK_SURFACE);
    let preview_label = if controls.camera_on {
        "Ваша камера"
    } else {
        "Камера выключена"
    };
    painter.text(
        preview.center(),
        egui::Align2::CENTER_CENTER,
        if controls.camera_on { "Вы" } else { "📷" },
        egui::FontId::proportional(28.0),
        Palette::TEXT_SECONDARY,
    );
    painter.text(
        preview.center_bottom() - Vec2::new(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        preview_label,
        egui::FontId::proportional(12.0),
        Palette::TEXT_TERTIARY,
    );

    let mut end = false;

    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(full.shrink(24.0)), |ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                Avatar::new(glyph.as_str(), color_from_key(&name)).size(40.0).show(ui);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&name).strong().color(Color32::WHITE));
                    ui.label(
                        egui::RichText::new(format!("Видеозвонок • {}", duration))
                            .monospace()
                            .color(Palette::TEXT_SECONDARY),
                    );
                });
            });
            ui.label(egui::RichText::new("HD качество").size(12.0).color(Palette::ONLINE));

            ui.add_space((ui.available_height() - 72.0).max(0.0));

            ui.horizontal(|ui| {
                let width = 4.0 * 64.0 + 3.0 * 24.0;
                ui.add_space((ui.available_width() - width).max(0.0) / 2.0);
                ui.spacing_mut().item_spacing.x = 24.0;

                let mic = if controls.muted { "🔇" } else { "🎤" };
                if control_button(ui, mic, "Микрофон", controls.muted, Palette::DESTRUCTIVE) {
                    if let Some(call) = coordinator.call_mut() {
                        call.controls.toggle_mute();
                    }
                }

                if control_button(ui, "📹", "Камера", !controls.camera_on, Palette::DESTRUCTIVE) {
                    if let Some(call) = coordinator.call_mut() {
                        call.controls.toggle_camera();
                    }
                }

                if control_button(ui, "🔊", "Динамик", controls.speaker, Palette::PURPLE) {
                    if let Some(call) = coordinator.call_mut() {
                        call.controls.toggle_speaker();
                    }
                }

                if control_button(ui, "📞", "Завершить", true, Palette::DESTRUCTIVE) {
                    end = true;
                }
            });
        });
    });

    if end {
        coordinator.end_call();
    }
}
