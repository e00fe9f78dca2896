//! Usage statistics panel

use crate::coordinator::ViewCoordinator;
use crate::storage::stats::UsageStats;
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Sense, Vec2};

const BAR_MAX_HEIGHT: f32 = 120.0;

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let mut close = false;

    ui.horizontal(|ui| {
        if ui.button("←").on_hover_text("Назад").clicked() {
            close = true;
        }
        ui.vertical(|ui| {
            ui.heading("📊 Статистика");
            ui.label(egui::RichText::new("Ваша активность за последние 7 дней").color(Palette::TEXT_SECONDARY));
        });
    });
    ui.separator();

    let stats = coordinator.store().stats();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            show_totals(ui, stats);
            ui.add_space(16.0);
            show_week_chart(ui, stats);
            ui.add_space(16.0);
            show_summary_cards(ui, stats);
            ui.add_space(16.0);
            show_achievements(ui, stats);
        });

    if close {
        coordinator.close_stats();
    }
}

fn show_totals(ui: &mut egui::Ui, stats: &UsageStats) {
    let call_time = format!("{}ч", stats.call_hours());
    let totals = [
        ("💬", stats.total_messages.to_string(), "Сообщений"),
        ("📞", stats.total_calls.to_string(), "Звонков"),
        ("📹", stats.total_video_calls.to_string(), "Видеозвонков"),
        ("⏱", call_time, "Время звонков"),
    ];

    ui.columns(totals.len(), |columns| {
        for (column, (icon, value, label)) in columns.iter_mut().zip(totals) {
            card(column, |ui| {
                ui.label(egui::RichText::new(icon).size(20.0));
                ui.label(egui::RichText::new(value).size(24.0).strong());
                ui.label(egui::RichText::new(label).size(12.0).color(Palette::TEXT_SECONDARY));
            });
        }
    });
}

fn show_week_chart(ui: &mut egui::Ui, stats: &UsageStats) {
    card(ui, |ui| {
        ui.label(egui::RichText::new("Активность по дням").strong());
        ui.horizontal(|ui| {
            legend(ui, Palette::PURPLE, "Сообщения");
            legend(ui, Palette::BLUE, "Звонки");
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for (day, (messages, calls)) in stats.week.iter().zip(stats.normalized_week()) {
                ui.vertical(|ui| {
                    let (rect, response) =
                        ui.allocate_exact_size(Vec2::new(36.0, BAR_MAX_HEIGHT), Sense::hover());
                    let painter = ui.painter();
                    let bar_width = 14.0;

                    let message_height = BAR_MAX_HEIGHT * messages.clamp(0.0, 1.0);
                    let message_bar = egui::Rect::from_min_max(
                        egui::pos2(rect.left() + 2.0, rect.bottom() - message_height),
                        egui::pos2(rect.left() + 2.0 + bar_width, rect.bottom()),
                    );
                    painter.rect_filled(message_bar, Rounding::same(3.0), Palette::PURPLE);

                    let call_height = BAR_MAX_HEIGHT * calls.clamp(0.0, 1.0);
                    let call_bar = egui::Rect::from_min_max(
                        egui::pos2(rect.right() - 2.0 - bar_width, rect.bottom() - call_height),
                        egui::pos2(rect.right() - 2.0, rect.bottom()),
                    );
                    painter.rect_filled(call_bar, Rounding::same(3.0), Palette::BLUE);

                    response.on_hover_text(format!(
                        "{} сообщений, {} звонков",
                        day.messages, day.calls
                    ));

                    ui.label(egui::RichText::new(day.day).size(11.0).color(Palette::TEXT_SECONDARY));
                });
            }
        });
    });
}

fn show_summary_cards(ui: &mut egui::Ui, stats: &UsageStats) {
    let cards = stats.summary_cards();
    ui.columns(cards.len(), |columns| {
        for (column, summary) in columns.iter_mut().zip(cards) {
            card(column, |ui| {
                ui.label(egui::RichText::new(summary.title).color(Palette::TEXT_SECONDARY));
                ui.label(egui::RichText::new(summary.value.to_string()).size(24.0).strong());
                ui.add(
                    egui::ProgressBar::new(f32::from(summary.progress) / 100.0)
                        .fill(Palette::PURPLE)
                        .desired_height(6.0),
                );
                ui.label(egui::RichText::new(summary.caption).size(12.0).color(Palette::TEXT_TERTIARY));
            });
        }
    });
}

fn show_achievements(ui: &mut egui::Ui, stats: &UsageStats) {
    card(ui, |ui| {
        ui.label(egui::RichText::new("🏆 Достижения").strong());
        ui.add_space(8.0);
        egui::Grid::new("achievements")
            .num_columns(2)
            .spacing([24.0, 12.0])
            .show(ui, |ui| {
                for (i, achievement) in stats.achievements().iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(achievement.icon).size(22.0).color(Palette::GOLD));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(achievement.title).strong());
                            ui.label(
                                egui::RichText::new(achievement.caption)
                                    .size(12.0)
                                    .color(Palette::TEXT_SECONDARY),
                            );
                        });
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn legend(ui: &mut egui::Ui, color: Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
    ui.painter().rect_filled(rect, Rounding::same(2.0), color);
    ui.label(egui::RichText::new(label).size(12.0).color(Palette::TEXT_SECONDARY));
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
