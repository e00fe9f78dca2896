//! Main application state and frame loop

use crate::coordinator::ViewCoordinator;
use crate::storage::settings::AppConfig;
use crate::ui::theme::{MessengerTheme, Palette};
use crate::ui::views;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Repaint cadence while a call timer is visible
const CALL_REPAINT: Duration = Duration::from_millis(250);

/// Repaint cadence otherwise, so toasts expire on time
const IDLE_REPAINT: Duration = Duration::from_secs(1);

pub struct MessengerApp {
    /// Keeps the runtime behind the coordinator's handle alive
    _runtime: Arc<Runtime>,
    coordinator: ViewCoordinator,
}

impl MessengerApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, runtime: Arc<Runtime>) -> Self {
        MessengerTheme::from_config(config.theme).apply(&cc.egui_ctx);

        let coordinator = ViewCoordinator::new(&config, runtime.handle().clone());

        Self {
            _runtime: runtime,
            coordinator,
        }
    }

    /// Draw active toasts stacked in the bottom-right corner
    fn show_toasts(&mut self, ctx: &egui::Context) {
        if self.coordinator.toasts().visible().is_empty() {
            return;
        }

        let mut dismissed: Option<usize> = None;

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.coordinator.toasts().visible().iter().enumerate() {
                    egui::Frame::popup(ui.style())
                        .fill(Palette::surface_elevated(ui.visuals()))
                        .show(ui, |ui| {
                            ui.set_width(300.0);
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(&toast.title).strong());
                                    if !toast.description.is_empty() {
                                        ui.label(
                                            egui::RichText::new(&toast.description)
                                                .size(12.0)
                                                .color(Palette::TEXT_SECONDARY),
                                        );
                                    }
                                });
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                                    if ui.small_button("✕").clicked() {
                                        dismissed = Some(index);
                                    }
                                });
                            });
                        });
                    ui.add_space(8.0);
                }
            });

        if let Some(index) = dismissed {
            self.coordinator.toasts_mut().dismiss(index);
        }
    }
}

impl eframe::App for MessengerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.coordinator.toasts_mut().prune(Instant::now());

        let repaint = if self.coordinator.active().is_call() {
            CALL_REPAINT
        } else {
            IDLE_REPAINT
        };
        ctx.request_repaint_after(repaint);

        if self.coordinator.is_authenticated() {
            views::main_view::show(&mut self.coordinator, ctx);
        } else {
            views::auth::show(&mut self.coordinator, ctx);
        }

        self.show_toasts(ctx);
    }
}
