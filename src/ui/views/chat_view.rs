//! Chat view - displays the transcript of one chat or channel

use crate::coordinator::ViewCoordinator;
use crate::storage::conversations::{Chat, ChatId};
use crate::storage::messages::Message;
use crate::ui::components::avatar::{color_from_key, Avatar};
use crate::ui::components::message_bubble;
use crate::ui::theme::Palette;
use egui::{Key, Modifiers, Rounding, Vec2};

const COMPOSER_ID: &str = "chat_composer";

/// Composer text and scroll bookkeeping for the open chat
#[derive(Debug, Clone, Default)]
pub struct ChatViewState {
    pub draft: String,
    rendered_len: Option<usize>,
}

impl ChatViewState {
    /// Returns true when the transcript length differs from the last frame
    pub fn take_scroll_request(&mut self, len: usize) -> bool {
        if self.rendered_len == Some(len) {
            return false;
        }
        self.rendered_len = Some(len);
        true
    }
}

/// Enter sends; Shift+Enter inserts a newline
pub fn is_submit_chord(key: Key, modifiers: Modifiers) -> bool {
    key == Key::Enter && !modifiers.shift
}

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui, chat_id: ChatId) {
    let Some(chat) = coordinator.store().chat(chat_id).cloned() else {
        return;
    };
    let messages: Vec<Message> = coordinator
        .store()
        .transcript(chat_id)
        .map(|t| t.messages().to_vec())
        .unwrap_or_default();

    show_header(coordinator, ui, &chat);

    let composer_height = 64.0;
    let scroll_to_end = coordinator.chat_view_mut().take_scroll_request(messages.len());

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - composer_height).max(0.0))
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add_space(12.0);

            for message in &messages {
                message_bubble::show(ui, message);
                ui.add_space(6.0);
            }

            if scroll_to_end {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });

    ui.separator();
    show_composer(coordinator, ui);
}

fn show_header(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui, chat: &Chat) {
    ui.horizontal(|ui| {
        ui.set_height(56.0);

        if ui.button("←").on_hover_text("Назад").clicked() {
            coordinator.close_chat();
            return;
        }

        Avatar::new(&chat.avatar, color_from_key(&chat.name)).size(40.0).show(ui);
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&chat.name).strong().size(16.0));
                if chat.verified {
                    ui.label(egui::RichText::new("✔").color(Palette::BLUE));
                }
                if chat.premium {
                    ui.label(egui::RichText::new("👑").color(Palette::GOLD));
                }
            });
            let presence = if chat.online {
                Palette::ONLINE
            } else {
                Palette::TEXT_SECONDARY
            };
            ui.label(egui::RichText::new(chat.presence_label()).size(12.0).color(presence));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);

            if ui.button("📞").on_hover_text("Голосовой звонок").clicked() {
                coordinator.start_call();
            }

            if ui.button("📹").on_hover_text("Видеозвонок").clicked() {
                coordinator.start_video_call();
            }
        });
    });

    ui.separator();
}

fn show_composer(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    let composer_id = egui::Id::new(COMPOSER_ID);
    let mut submit = false;

    // Swallow the submit chord before the text edit turns it into a newline
    if ui.memory(|m| m.has_focus(composer_id)) {
        ui.input_mut(|i| {
            i.events.retain(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if is_submit_chord(*key, *modifiers) => {
                    submit = true;
                    false
                }
                _ => true,
            });
        });
    }

    ui.horizontal(|ui| {
        ui.add_space(8.0);

        ui.add_enabled(false, egui::Button::new("📎"))
            .on_disabled_hover_text("Вложения недоступны");

        let state = coordinator.chat_view_mut();
        let text_width = ui.available_width() - 56.0;
        ui.add(
            egui::TextEdit::multiline(&mut state.draft)
                .id(composer_id)
                .hint_text("Напишите сообщение...")
                .desired_rows(1)
                .desired_width(text_width)
                .frame(true),
        );

        let can_send = !state.draft.trim().is_empty();
        let send = egui::Button::new(egui::RichText::new("➤").size(18.0))
            .fill(if can_send {
                Palette::PURPLE
            } else {
                Palette::surface_elevated(ui.visuals())
            })
            .rounding(Rounding::same(20.0))
            .min_size(Vec2::splat(40.0));

        if ui.add_enabled(can_send, send).clicked() {
            submit = true;
        }
    });

    if submit && coordinator.send_message() {
        ui.memory_mut(|m| m.request_focus(composer_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_submits_but_shift_enter_does_not() {
        assert!(is_submit_chord(Key::Enter, Modifiers::NONE));
        assert!(is_submit_chord(Key::Enter, Modifiers::CTRL));
        assert!(!is_submit_chord(Key::Enter, Modifiers::SHIFT));
        assert!(!is_submit_chord(Key::A, Modifiers::NONE));
    }

    #[test]
    fn test_scroll_requested_when_length_changes() {
        let mut state = ChatViewState::default();
        assert!(state.take_scroll_request(4));
        assert!(!state.take_scroll_request(4));
        assert!(state.take_scroll_request(5));
        assert!(!state.take_scroll_request(5));
    }

    fn enter(modifiers: Modifiers) -> egui::Event {
        egui::Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    /// Draw the composer for one frame with the given input events
    fn composer_frame(ctx: &egui::Context, coordinator: &mut ViewCoordinator, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| show_composer(coordinator, ui));
        });
    }

    #[tokio::test]
    async fn test_composer_sends_on_enter_only() {
        let config = crate::storage::settings::AppConfig {
            skip_auth: true,
            ..Default::default()
        };
        let mut coordinator = ViewCoordinator::new(&config, tokio::runtime::Handle::current());
        coordinator.select_chat(1);
        coordinator.chat_view_mut().draft = "Привет".to_string();
        let before = coordinator.store().transcript(1).map(|t| t.len()).unwrap_or_default();

        let ctx = egui::Context::default();
        ctx.memory_mut(|m| m.request_focus(egui::Id::new(COMPOSER_ID)));
        composer_frame(&ctx, &mut coordinator, Vec::new());
        assert!(ctx.memory(|m| m.has_focus(egui::Id::new(COMPOSER_ID))));

        composer_frame(&ctx, &mut coordinator, vec![enter(Modifiers::SHIFT)]);
        assert_eq!(coordinator.store().transcript(1).map(|t| t.len()), Some(before));
        assert!(coordinator.chat_view_mut().draft.starts_with("Привет"));

        composer_frame(&ctx, &mut coordinator, vec![enter(Modifiers::NONE)]);
        let transcript = coordinator.store().transcript(1).map(|t| t.messages().to_vec()).unwrap_or_default();
        assert_eq!(transcript.len(), before + 1);
        assert!(transcript.last().is_some_and(|m| m.text.starts_with("Привет")));
        assert!(coordinator.chat_view_mut().draft.is_empty());
    }
}
