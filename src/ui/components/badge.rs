//! Badge component for unread counts and labels

use crate::ui::theme::Palette;
use egui::{Color32, Vec2};

/// Badge type
#[derive(Clone)]
pub enum BadgeType {
    /// Numeric badge showing count
    Count(u32),
    /// Custom text
    Text(String),
}

/// Pill-shaped badge
pub struct Badge {
    badge_type: BadgeType,
    color: Color32,
    text_color: Color32,
}

impl Badge {
    /// Create a count badge
    pub fn count(count: u32) -> Self {
        Self {
            badge_type: BadgeType::Count(count),
            color: Palette::UNREAD,
            text_color: Color32::WHITE,
        }
    }

    /// Create a text badge
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            badge_type: BadgeType::Text(text.into()),
            color: Palette::UNREAD,
            text_color: Color32::WHITE,
        }
    }

    /// Set badge color
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let text = match &self.badge_type {
            BadgeType::Count(count) => count_label(*count),
            BadgeType::Text(text) => text.clone(),
        };

        let padding = 7.0;
        let height = 20.0;
        let font = egui::FontId::proportional(11.0);
        let galley = ui.painter().layout_no_wrap(text.clone(), font.clone(), self.text_color);
        let width = (galley.rect.width() + padding * 2.0).max(height);

        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, egui::Rounding::same(height / 2.0), self.color);
            painter.text(rect.center(), egui::Align2::CENTER_CENTER, &text, font, self.text_color);
        }

        response
    }
}

/// Counts above 99 collapse to "99+"
fn count_label(count: u32) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(5), "5");
        assert_eq!(count_label(99), "99");
        assert_eq!(count_label(120), "99+");
    }
}
