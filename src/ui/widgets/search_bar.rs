//! Search bar widget

use crate::ui::theme::Palette;
use egui::Rounding;

/// Rounded search field with a clear button
pub struct SearchBar {
    placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn show(self, ui: &mut egui::Ui, text: &mut String) -> egui::Response {
        let desired_width = ui.available_width();

        egui::Frame::none()
            .fill(Palette::surface_elevated(ui.visuals()))
            .rounding(Rounding::same(20.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🔍").color(Palette::TEXT_TERTIARY));

                    let response = ui.add(
                        egui::TextEdit::singleline(text)
                            .hint_text(self.placeholder.as_str())
                            .desired_width(desired_width - 70.0)
                            .frame(false),
                    );

                    if !text.is_empty() && ui.small_button("✕").clicked() {
                        text.clear();
                    }

                    response
                })
                .inner
            })
            .inner
    }
}
