//! Avatar component for chats, channels and contacts

use crate::ui::theme::Palette;
use egui::{Color32, Vec2};

/// What to draw in the avatar's corner
#[derive(Debug, Clone, Copy, PartialEq)]
enum Corner {
    None,
    Presence(bool),
    Count(u32),
}

/// Round avatar showing initials or an emoji glyph
pub struct Avatar {
    size: f32,
    color: Color32,
    glyph: String,
    corner: Corner,
}

impl Avatar {
    pub fn new(glyph: impl Into<String>, color: Color32) -> Self {
        Self {
            size: 40.0,
            color,
            glyph: glyph.into(),
            corner: Corner::None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show a green dot when online; nothing otherwise
    pub fn online(mut self, is_online: bool) -> Self {
        self.corner = Corner::Presence(is_online);
        self
    }

    /// Show a small member-count bubble
    pub fn member_count(mut self, count: u32) -> Self {
        self.corner = Corner::Count(count);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let ring = Palette::surface(ui.visuals());
            let center = rect.center();
            let radius = self.size / 2.0;

            painter.circle_filled(center, radius, self.color);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                &self.glyph,
                egui::FontId::proportional(self.size * 0.4),
                Color32::WHITE,
            );

            let corner = center + Vec2::splat(radius * 0.7);
            match self.corner {
                Corner::None | Corner::Presence(false) => {}
                Corner::Presence(true) => {
                    let r = self.size * 0.14;
                    painter.circle_filled(corner, r + 2.0, ring);
                    painter.circle_filled(corner, r, Palette::ONLINE);
                }
                Corner::Count(count) => {
                    let r = self.size * 0.22;
                    painter.circle_filled(corner, r + 2.0, ring);
                    painter.circle_filled(corner, r, Palette::BLUE);
                    painter.text(
                        corner,
                        egui::Align2::CENTER_CENTER,
                        count.to_string(),
                        egui::FontId::proportional(r),
                        Color32::WHITE,
                    );
                }
            }
        }

        response
    }
}

/// Pick a stable color for an avatar from its key
pub fn color_from_key(key: &str) -> Color32 {
    let hash = key.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32).wrapping_mul(31));

    let colors = [
        Palette::PURPLE,
        Palette::BLUE,
        Color32::from_rgb(0xEC, 0x48, 0x99), // Pink
        Color32::from_rgb(0x63, 0x66, 0xF1), // Indigo
        Color32::from_rgb(0x14, 0xB8, 0xA6), // Teal
        Color32::from_rgb(0xF9, 0x73, 0x16), // Orange
    ];

    colors[(hash as usize) % colors.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stable() {
        assert_eq!(color_from_key("Анна Иванова"), color_from_key("Анна Иванова"));
    }
}
