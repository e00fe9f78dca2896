//! Message bubble component

use crate::storage::messages::Message;
use crate::ui::theme::Palette;
use egui::{Color32, Rounding};

/// Draw one message, right-aligned when it is ours
pub fn show(ui: &mut egui::Ui, message: &Message) {
    let max_width = ui.available_width() * 0.7;
    let (fill, time_color) = if message.is_mine {
        (Palette::BUBBLE_SENT, Color32::from_white_alpha(180))
    } else {
        (Palette::BUBBLE_RECEIVED, Palette::TEXT_SECONDARY)
    };

    // Asymmetric rounding for chat bubble shape
    let rounding = Rounding {
        nw: 16.0,
        ne: 16.0,
        sw: if message.is_mine { 16.0 } else { 4.0 },
        se: if message.is_mine { 4.0 } else { 16.0 },
    };

    let layout = if message.is_mine {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        ui.add_space(12.0);
        egui::Frame::none()
            .fill(fill)
            .rounding(rounding)
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&message.text).color(Color32::WHITE));
                    ui.label(egui::RichText::new(&message.time).size(11.0).color(time_color));
                });
            });
    });
}
