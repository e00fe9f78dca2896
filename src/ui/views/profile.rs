//! Profile screen - user card, phone contacts and entry points to the
//! premium, stats and privacy panels

use crate::coordinator::ViewCoordinator;
use crate::ui::components::avatar::{color_from_key, Avatar};
use crate::ui::components::badge::Badge;
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};

/// What the user clicked this frame
enum ProfileAction {
    Close,
    Premium,
    Stats,
    Privacy,
    SyncContact(usize),
    SyncAll,
    Logout,
}

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let mut action: Option<ProfileAction> = None;
    let profile = coordinator.store().profile().clone();
    let contacts = coordinator.store().contacts().to_vec();

    ui.horizontal(|ui| {
        if ui.button("←").on_hover_text("Назад").clicked() {
            action = Some(ProfileAction::Close);
        }
        ui.heading("Профиль");
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_max_width(640.0);

            // Header card
            egui::Frame::none()
                .fill(Palette::PURPLE)
                .rounding(Rounding::same(16.0))
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        Avatar::new(&profile.initials, Palette::PURPLE_PRESSED).size(80.0).show(ui);
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.add_space(12.0);
                            ui.label(
                                egui::RichText::new(&profile.display_name)
                                    .size(22.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                            ui.label(egui::RichText::new(&profile.handle).color(Color32::from_white_alpha(200)));
                        });
                    });
                });

            ui.add_space(12.0);

            card(ui, |ui| {
                info_row(ui, "📞", "Телефон", &profile.phone);
                info_row(ui, "✉", "Email", &profile.email);
                info_row(ui, "📍", "Местоположение", &profile.location);
                info_row(ui, "💬", "Статус", &profile.status);
            });

            ui.add_space(12.0);

            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("📱 Контакты из телефона").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let pending = contacts.iter().any(|c| !c.synced);
                        if ui
                            .add_enabled(pending, egui::Button::new("Синхронизировать все"))
                            .clicked()
                        {
                            action = Some(ProfileAction::SyncAll);
                        }
                    });
                });
                ui.add_space(8.0);

                for (index, contact) in contacts.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let color = if contact.synced {
                            color_from_key(&contact.name)
                        } else {
                            Palette::TEXT_TERTIARY
                        };
                        Avatar::new(contact.initials(), color).size(36.0).show(ui);
                        ui.vertical(|ui| {
                            ui.label(&contact.name);
                            ui.label(egui::RichText::new(&contact.phone).size(12.0).color(Palette::TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if contact.synced {
                                Badge::text("✔ В мессенджере").color(Palette::ONLINE).show(ui);
                            } else if ui.button("Пригласить").clicked() {
                                action = Some(ProfileAction::SyncContact(index));
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });

            ui.add_space(12.0);

            let wide = Vec2::new(ui.available_width(), 40.0);
            let premium = egui::Button::new(egui::RichText::new("👑 Premium подписка").color(Color32::WHITE))
                .fill(Palette::GOLD)
                .min_size(wide);
            if ui.add(premium).clicked() {
                action = Some(ProfileAction::Premium);
            }
            if ui.add(egui::Button::new("📊 Статистика").min_size(wide)).clicked() {
                action = Some(ProfileAction::Stats);
            }
            if ui.add(egui::Button::new("🛡 Приватность").min_size(wide)).clicked() {
                action = Some(ProfileAction::Privacy);
            }

            ui.add_space(12.0);
            let logout = egui::Button::new(egui::RichText::new("Выйти").color(Palette::DESTRUCTIVE))
                .stroke(egui::Stroke::new(1.0, Palette::DESTRUCTIVE))
                .fill(Color32::TRANSPARENT)
                .min_size(wide);
            if ui.add(logout).clicked() {
                action = Some(ProfileAction::Logout);
            }
        });

    match action {
        Some(ProfileAction::Close) => coordinator.close_profile(),
        Some(ProfileAction::Premium) => coordinator.show_premium(),
        Some(ProfileAction::Stats) => coordinator.show_stats(),
        Some(ProfileAction::Privacy) => coordinator.show_privacy(),
        Some(ProfileAction::SyncContact(index)) => coordinator.sync_contact(index),
        Some(ProfileAction::SyncAll) => coordinator.sync_all_contacts(),
        Some(ProfileAction::Logout) => coordinator.logout(),
        None => {}
    }
}

fn info_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(18.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).size(12.0).color(Palette::TEXT_SECONDARY));
            ui.label(value);
        });
    });
    ui.add_space(6.0);
}

fn card(ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(Palette::surface(ui.visuals()))
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            body(ui);
        });
}
