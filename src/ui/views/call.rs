//! Voice call screen and the call session shared with the video screen

use crate::coordinator::ViewCoordinator;
use crate::services::call_timer::CallTimer;
use crate::storage::conversations::ChatId;
use crate::ui::components::avatar::{color_from_key, Avatar};
use crate::ui::theme::Palette;
use egui::{Color32, Rounding, Vec2};
use tokio::runtime::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Voice,
    Video,
}

/// In-call toggles. Each toggle flips exactly one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallControls {
    pub muted: bool,
    pub speaker: bool,
    pub camera_on: bool,
}

impl CallControls {
    pub fn for_kind(kind: CallKind) -> Self {
        Self {
            muted: false,
            speaker: false,
            camera_on: kind == CallKind::Video,
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_speaker(&mut self) {
        self.speaker = !self.speaker;
    }

    pub fn toggle_camera(&mut self) {
        self.camera_on = !self.camera_on;
    }
}

/// A running call. Dropping the session stops its timer.
pub struct CallSession {
    pub chat_id: ChatId,
    pub kind: CallKind,
    pub controls: CallControls,
    timer: CallTimer,
}

impl CallSession {
    pub fn start(chat_id: ChatId, kind: CallKind, runtime: &Handle) -> Self {
        tracing::info!("Starting {:?} call with chat {}", kind, chat_id);
        Self {
            chat_id,
            kind,
            controls: CallControls::for_kind(kind),
            timer: CallTimer::start(runtime),
        }
    }

    /// Call duration as `MM:SS`
    pub fn duration(&self) -> String {
        self.timer.display()
    }
}

/// Round control button; returns true when clicked
pub(super) fn control_button(
    ui: &mut egui::Ui,
    icon: &str,
    hint: &str,
    active: bool,
    fill: Color32,
) -> bool {
    let fill = if active { fill } else { Palette::surface_elevated(ui.visuals()) };
    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(Color32::WHITE))
        .fill(fill)
        .rounding(Rounding::same(32.0))
        .min_size(Vec2::splat(64.0));

    ui.add(button).on_hover_text(hint).clicked()
}

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let Some(session) = coordinator.call() else {
        return;
    };
    let chat_id = session.chat_id;
    let duration = session.duration();
    let controls = session.controls;

    let (name, glyph) = coordinator
        .store()
        .chat(chat_id)
        .map(|chat| (chat.name.clone(), chat.avatar.clone()))
        .unwrap_or_default();

    let mut end = false;

    egui::Frame::none()
        .fill(Palette::background(ui.visuals()))
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.15);

                Avatar::new(glyph, color_from_key(&name)).size(128.0).show(ui);
                ui.add_space(24.0);

                ui.label(egui::RichText::new(&name).size(28.0).strong());
                ui.label(egui::RichText::new("Голосовой звонок").color(Palette::TEXT_SECONDARY));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&duration).size(20.0).monospace().color(Palette::PURPLE));

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("📶 Качество HD: Отличное")
                        .size(12.0)
                        .color(Palette::ONLINE),
                );

                ui.add_space(48.0);

                ui.horizontal(|ui| {
                    let width = 3.0 * 64.0 + 2.0 * 24.0;
                    ui.add_space((ui.available_width() - width).max(0.0) / 2.0);
                    ui.spacing_mut().item_spacing.x = 24.0;

                    let mic = if controls.muted { "🔇" } else { "🎤" };
                    if control_button(ui, mic, "Микрофон", controls.muted, Palette::DESTRUCTIVE) {
                        if let Some(call) = coordinator.call_mut() {
                            call.controls.toggle_mute();
                        }
                    }

                    if control_button(ui, "📞", "Завершить", true, Palette::DESTRUCTIVE) {
                        end = true;
                    }

                    if control_button(ui, "🔊", "Динамик", controls.speaker, Palette::PURPLE) {
                        if let Some(call) = coordinator.call_mut() {
                            call.controls.toggle_speaker();
                        }
                    }
                });
            });
        });

    if end {
        coordinator.end_call();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_call_starts_with_camera_off() {
        let controls = CallControls::for_kind(CallKind::Voice);
        assert!(!controls.muted);
        assert!(!controls.speaker);
        assert!(!controls.camera_on);
    }

    #[test]
    fn test_video_call_starts_with_camera_on() {
        assert!(CallControls::for_kind(CallKind::Video).camera_on);
    }

    #[test]
    fn test_each_toggle_flips_one_flag() {
        let initial = CallControls::for_kind(CallKind::Video);

        let mut controls = initial;
        controls.toggle_mute();
        assert_eq!(controls, CallControls { muted: true, ..initial });
        controls.toggle_mute();
        assert_eq!(controls, initial);

        controls.toggle_speaker();
        assert_eq!(controls, CallControls { speaker: true, ..initial });
        controls.toggle_speaker();

        controls.toggle_camera();
        assert_eq!(controls, CallControls { camera_on: false, ..initial });
        controls.toggle_camera();
        assert_eq!(controls, initial);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_reports_duration() {
        let session = CallSession::start(1, CallKind::Voice, &Handle::current());
        assert_eq!(session.duration(), "00:00");

        tokio::time::sleep(std::time::Duration::from_millis(2500)).await;
        assert_eq!(session.duration(), "00:02");
    }
}
