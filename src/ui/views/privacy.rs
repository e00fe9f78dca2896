//! Privacy settings panel

use crate::coordinator::ViewCoordinator;
use crate::storage::settings::{AutoDelete, PrivacySettings, Visibility};
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let mut save = false;
    let mut cancel = false;

    ui.horizontal(|ui| {
        if ui.button("←").on_hover_text("Назад").clicked() {
            cancel = true;
        }
        ui.vertical(|ui| {
            ui.heading("🛡 Приватность");
            ui.label(egui::RichText::new("Контролируйте доступ к вашим данным").color(Palette::TEXT_SECONDARY));
        });
    });
    ui.separator();

    let footer_height = 56.0;
    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - footer_height).max(0.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_max_width(640.0);
            show_sections(ui, coordinator.privacy_draft_mut());
        });

    ui.separator();
    ui.horizontal(|ui| {
        let save_button = egui::Button::new(egui::RichText::new("Сохранить").color(Color32::WHITE))
            .fill(Palette::PURPLE)
            .min_size(Vec2::new(140.0, 36.0));
        if ui.add(save_button).clicked() {
            save = true;
        }
        if ui.add(egui::Button::new("Отмена").min_size(Vec2::new(140.0, 36.0))).clicked() {
            cancel = true;
        }
    });

    if save {
        coordinator.save_privacy();
    } else if cancel {
        coordinator.close_privacy();
    }
}

fn show_sections(ui: &mut egui::Ui, draft: &mut PrivacySettings) {
    section(ui, "👁 Видимость профиля", |ui| {
        toggle_row(ui, "Показывать статус онлайн", &mut draft.show_online);
        toggle_row(ui, "Время последнего визита", &mut draft.show_last_seen);
        visibility_row(ui, "profile_photo", "Кто видит фото профиля", &mut draft.profile_photo);
        visibility_row(ui, "status", "Кто видит статус", &mut draft.status);
    });

    section(ui, "💬 Сообщения", |ui| {
        toggle_row(ui, "Отчёты о прочтении", &mut draft.read_receipts);
        ui.horizontal(|ui| {
            ui.label("Автоудаление сообщений");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("auto_delete")
                    .selected_text(draft.auto_delete.label())
                    .show_ui(ui, |ui| {
                        for option in AutoDelete::ALL {
                            ui.selectable_value(&mut draft.auto_delete, option, option.label());
                        }
                    });
            });
        });
    });

    section(ui, "🔒 Безопасность", |ui| {
        toggle_row(ui, "Двухфакторная аутентификация", &mut draft.two_step_verification);
        toggle_row(ui, "Сквозное шифрование", &mut draft.end_to_end_encryption);
        toggle_row(ui, "Блокировка скриншотов", &mut draft.block_screenshots);
    });

    section(ui, "📞 Звонки и группы", |ui| {
        visibility_row(ui, "allow_calls", "Кто может звонить", &mut draft.allow_calls);
        visibility_row(ui, "allow_video_calls", "Кто может делать видеозвонки", &mut draft.allow_video_calls);
        visibility_row(ui, "allow_groups", "Кто может добавлять в группы", &mut draft.allow_groups);
    });
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(Palette::surface(ui.visuals()))
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().size(16.0));
            ui.add_space(8.0);
            body(ui);
        });
    ui.add_space(12.0);
}

fn toggle_row(ui: &mut egui::Ui, label: &str, value: &mut bool) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(value, "");
        });
    });
}

fn visibility_row(ui: &mut egui::Ui, id: &str, label: &str, value: &mut Visibility) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(id)
                .selected_text(value.label())
                .show_ui(ui, |ui| {
                    for option in Visibility::ALL {
                        ui.selectable_value(value, option, option.label());
                    }
                });
        });
    });
}
