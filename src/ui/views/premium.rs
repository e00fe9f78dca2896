//! Premium subscription modal

use crate::coordinator::ViewCoordinator;
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};

const FEATURES: [(&str, &str); 8] = [
    ("⭐", "Приоритетный статус в чатах"),
    ("📢", "Эксклюзивные Premium каналы"),
    ("📹", "HD видеозвонки без ограничений"),
    ("📁", "Загрузка файлов до 4 ГБ"),
    ("🎨", "Уникальные темы оформления"),
    ("🔒", "Усиленная приватность"),
    ("✨", "Анимированные аватары"),
    ("👥", "Создание до 50 групп"),
];

/// Subscription plans on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumPlan {
    Monthly,
    Yearly,
}

impl PremiumPlan {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Price in rubles for one billing period
    pub fn price_rub(self) -> u32 {
        match self {
            Self::Monthly => 299,
            Self::Yearly => 2148,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Monthly => "Месячная подписка",
            Self::Yearly => "Годовая подписка",
        }
    }

    /// Percent saved against paying monthly for a year
    pub fn discount_percent(self) -> u32 {
        let full_year = Self::Monthly.price_rub() * 12;
        let paid = match self {
            Self::Monthly => full_year,
            Self::Yearly => self.price_rub(),
        };
        (full_year - paid) * 100 / full_year
    }
}

pub fn show(coordinator: &mut ViewCoordinator, ctx: &egui::Context) {
    let mut open = true;
    let mut chosen: Option<PremiumPlan> = None;

    egui::Window::new("👑 Premium")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(440.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Откройте все возможности мессенджера")
                        .color(Palette::TEXT_SECONDARY),
                );
            });
            ui.add_space(12.0);

            egui::Grid::new("premium_features")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for pair in FEATURES.chunks(2) {
                        for (icon, label) in pair {
                            ui.label(format!("{} {}", icon, label));
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);

            if plan_card(ui, PremiumPlan::Monthly, |ui| {
                ui.label(egui::RichText::new("Оплата каждый месяц").size(12.0).color(Palette::TEXT_SECONDARY));
                ui.label(egui::RichText::new("299₽ в месяц").size(20.0).strong());
            }) {
                chosen = Some(PremiumPlan::Monthly);
            }

            ui.add_space(8.0);

            if plan_card(ui, PremiumPlan::Yearly, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("-{}%", PremiumPlan::Yearly.discount_percent()))
                            .color(Color32::WHITE)
                            .background_color(Palette::GOLD),
                    );
                    ui.label(egui::RichText::new("Выгода 1440₽ в год").size(12.0).color(Palette::ONLINE));
                });
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("2148₽ в год").size(20.0).strong());
                    ui.label(egui::RichText::new("3588₽").strikethrough().color(Palette::TEXT_TERTIARY));
                });
                ui.label(egui::RichText::new("179₽ в месяц").size(12.0).color(Palette::TEXT_SECONDARY));
            }) {
                chosen = Some(PremiumPlan::Yearly);
            }

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("🔒 Безопасная оплата • Отмена в любой момент • Без скрытых платежей")
                        .size(11.0)
                        .color(Palette::TEXT_TERTIARY),
                );
            });
        });

    if let Some(plan) = chosen {
        coordinator.subscribe(plan);
    } else if !open {
        coordinator.close_premium();
    }
}

/// Clickable plan card; returns true when the plan is picked
fn plan_card(ui: &mut egui::Ui, plan: PremiumPlan, body: impl FnOnce(&mut egui::Ui)) -> bool {
    let mut picked = false;
    egui::Frame::none()
        .fill(Palette::surface_elevated(ui.visuals()))
        .rounding(Rounding::same(12.0))
        .stroke(egui::Stroke::new(1.0, Palette::PURPLE))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(plan.title()).strong());
            body(ui);
            ui.add_space(6.0);
            let button = egui::Button::new(egui::RichText::new("Выбрать").color(Color32::WHITE))
                .fill(Palette::PURPLE)
                .min_size(Vec2::new(ui.available_width(), 32.0));
            picked = ui.add(button).clicked();
        });
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tags_and_prices() {
        assert_eq!(PremiumPlan::Monthly.tag(), "monthly");
        assert_eq!(PremiumPlan::Yearly.tag(), "yearly");
        assert_eq!(PremiumPlan::Monthly.price_rub(), 299);
        assert_eq!(PremiumPlan::Yearly.price_rub(), 2148);
    }

    #[test]
    fn test_yearly_discount() {
        assert_eq!(PremiumPlan::Monthly.price_rub() * 12, 3588);
        assert_eq!(PremiumPlan::Yearly.discount_percent(), 40);
        assert_eq!(PremiumPlan::Monthly.discount_percent(), 0);
    }
}
