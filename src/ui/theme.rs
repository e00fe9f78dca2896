//! Messenger theme for egui

use crate::storage::settings::Theme;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, ThemePreference, Visuals};

/// Messenger color palette
pub struct Palette;

impl Palette {
    // Primary colors
    pub const PURPLE: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
    pub const PURPLE_HOVER: Color32 = Color32::from_rgb(0x7C, 0x4D, 0xE8);
    pub const PURPLE_PRESSED: Color32 = Color32::from_rgb(0x6D, 0x3F, 0xD6);
    pub const BLUE: Color32 = Color32::from_rgb(0x0E, 0xA5, 0xE9);
    pub const GOLD: Color32 = Color32::from_rgb(0xEA, 0xB3, 0x08);

    // Dark theme colors
    pub const DARK_BG: Color32 = Color32::from_rgb(0x12, 0x10, 0x1A);
    pub const DARK_SURFACE: Color32 = Color32::from_rgb(0x1F, 0x1C, 0x2B);
    pub const DARK_SURFACE_ELEVATED: Color32 = Color32::from_rgb(0x2C, 0x28, 0x3D);

    // Light theme colors
    pub const LIGHT_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_SURFACE: Color32 = Color32::from_rgb(0xF5, 0xF3, 0xFA);
    pub const LIGHT_SURFACE_ELEVATED: Color32 = Color32::from_rgb(0xE9, 0xE5, 0xF3);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xA8, 0xA3, 0xB8);
    pub const TEXT_TERTIARY: Color32 = Color32::from_rgb(0x78, 0x73, 0x88);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1B, 0x18, 0x24);

    // Message bubble colors
    pub const BUBBLE_SENT: Color32 = Self::PURPLE;
    pub const BUBBLE_RECEIVED: Color32 = Self::DARK_SURFACE_ELEVATED;

    // Status colors
    pub const ONLINE: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);
    pub const DESTRUCTIVE: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

    // Unread indicator
    pub const UNREAD: Color32 = Self::PURPLE;

    /// Page background for the active theme
    pub fn background(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Self::DARK_BG
        } else {
            Self::LIGHT_BG
        }
    }

    /// Card fill for the active theme
    pub fn surface(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }

    /// Fill for inputs, pills and selected rows
    pub fn surface_elevated(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Self::DARK_SURFACE_ELEVATED
        } else {
            Self::LIGHT_SURFACE_ELEVATED
        }
    }
}

/// Theme configuration
///
/// Both the dark and the light style are installed; egui picks one per frame
/// from the preference, following the OS when the preference is `System`.
pub struct MessengerTheme {
    preference: ThemePreference,
}

impl MessengerTheme {
    pub fn from_config(theme: Theme) -> Self {
        let preference = match theme {
            Theme::Dark => ThemePreference::Dark,
            Theme::Light => ThemePreference::Light,
            Theme::System => ThemePreference::System,
        };
        Self { preference }
    }

    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style_of(egui::Theme::Dark, Self::style(Self::dark_visuals()));
        ctx.set_style_of(egui::Theme::Light, Self::style(Self::light_visuals()));
        ctx.options_mut(|o| o.theme_preference = self.preference);
    }

    fn style(visuals: Visuals) -> Style {
        let mut style = Style {
            visuals,
            ..Default::default()
        };

        style.text_styles = [
            (TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(16.0);

        style
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = Palette::DARK_BG;
        visuals.window_fill = Palette::DARK_SURFACE;
        visuals.extreme_bg_color = Palette::DARK_SURFACE;
        visuals.faint_bg_color = Palette::DARK_SURFACE;

        visuals.widgets.noninteractive.bg_fill = Palette::DARK_SURFACE;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Palette::TEXT_PRIMARY);
        visuals.widgets.inactive.bg_fill = Palette::DARK_SURFACE_ELEVATED;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Palette::TEXT_PRIMARY);
        Self::accent_widgets(&mut visuals);

        visuals.selection.bg_fill = Palette::PURPLE.linear_multiply(0.5);
        visuals.window_shadow.blur = 16.0;

        visuals
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();

        visuals.panel_fill = Palette::LIGHT_BG;
        visuals.window_fill = Palette::LIGHT_SURFACE;
        visuals.extreme_bg_color = Palette::LIGHT_SURFACE;
        visuals.faint_bg_color = Palette::LIGHT_SURFACE;

        visuals.widgets.noninteractive.bg_fill = Palette::LIGHT_SURFACE;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Palette::TEXT_DARK);
        visuals.widgets.inactive.bg_fill = Palette::LIGHT_SURFACE_ELEVATED;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Palette::TEXT_DARK);
        Self::accent_widgets(&mut visuals);

        visuals.selection.bg_fill = Palette::PURPLE.linear_multiply(0.3);
        visuals.window_shadow.blur = 8.0;

        visuals
    }

    fn accent_widgets(visuals: &mut Visuals) {
        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.rounding = Rounding::same(10.0);
        }

        visuals.widgets.hovered.bg_fill = Palette::PURPLE_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Palette::TEXT_PRIMARY);
        visuals.widgets.active.bg_fill = Palette::PURPLE_PRESSED;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Palette::TEXT_PRIMARY);

        visuals.selection.stroke = Stroke::new(1.0, Palette::PURPLE);
        visuals.hyperlink_color = Palette::PURPLE;
        visuals.window_rounding = Rounding::same(16.0);
    }
}
