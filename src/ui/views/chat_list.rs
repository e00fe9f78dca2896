//! Chat list panel - chats and channels with search

use crate::coordinator::ViewCoordinator;
use crate::storage::conversations::{filter_by_name, format_compact_count, Chat, ChatId, ChatKind};
use crate::storage::MessengerStore;
use crate::ui::components::avatar::{color_from_key, Avatar};
use crate::ui::components::badge::Badge;
use crate::ui::theme::Palette;
use crate::ui::widgets::search_bar::SearchBar;
use egui::{Color32, Rounding, Sense};

/// Which collection the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListTab {
    #[default]
    Chats,
    Channels,
}

/// Search text and active tab
#[derive(Debug, Clone, Default)]
pub struct ChatListState {
    pub search: String,
    pub tab: ListTab,
}

impl ChatListState {
    /// Entries of the active tab matching the search text
    pub fn visible<'a>(&self, store: &'a MessengerStore) -> Vec<&'a Chat> {
        let source = match self.tab {
            ListTab::Chats => store.chats(),
            ListTab::Channels => store.channels(),
        };
        filter_by_name(source, &self.search)
    }
}

pub fn show(coordinator: &mut ViewCoordinator, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Сообщения").color(Palette::PURPLE).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("👤").on_hover_text("Профиль").clicked() {
                coordinator.show_profile();
            }
        });
    });

    let state = coordinator.chat_list_mut();
    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.tab, ListTab::Chats, "💬 Чаты");
        ui.selectable_value(&mut state.tab, ListTab::Channels, "📢 Каналы");
    });
    let placeholder = match state.tab {
        ListTab::Chats => "Поиск контактов...",
        ListTab::Channels => "Поиск каналов...",
    };
    SearchBar::new(placeholder).show(ui, &mut state.search);

    ui.separator();

    let selected = coordinator.selected_chat();
    let items: Vec<Chat> = coordinator.visible_chats().into_iter().cloned().collect();
    let mut clicked: Option<ChatId> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            for chat in &items {
                if show_item(ui, chat, selected == Some(chat.id)) {
                    clicked = Some(chat.id);
                }
            }

            if items.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(egui::RichText::new("Ничего не найдено").color(Palette::TEXT_SECONDARY));
                });
            }
        });

    if let Some(id) = clicked {
        coordinator.select_chat(id);
    }
}

/// Draw one row; returns true when clicked
fn show_item(ui: &mut egui::Ui, chat: &Chat, is_selected: bool) -> bool {
    let fill = if is_selected {
        Palette::surface_elevated(ui.visuals())
    } else {
        Color32::TRANSPARENT
    };

    let row = egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(12.0, 10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let avatar = Avatar::new(&chat.avatar, color_from_key(&chat.name)).size(48.0);
                let avatar = match chat.kind {
                    ChatKind::Direct => avatar.online(chat.online),
                    ChatKind::Group { members } => avatar.member_count(members),
                    ChatKind::Channel { .. } => avatar,
                };
                avatar.show(ui);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&chat.name).strong());
                        if chat.is_group() {
                            ui.label(egui::RichText::new("👥").size(11.0).color(Palette::TEXT_TERTIARY));
                        }
                        if chat.verified {
                            ui.label(egui::RichText::new("✔").color(Palette::BLUE));
                        }
                        if chat.premium {
                            ui.label(egui::RichText::new("👑").color(Palette::GOLD));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(&chat.time).size(12.0).color(Palette::TEXT_TERTIARY));
                        });
                    });

                    ui.horizontal(|ui| {
                        let preview = match chat.kind {
                            ChatKind::Channel { subscribers } => format!(
                                "{} · {}",
                                format_compact_count(subscribers),
                                chat.last_message
                            ),
                            _ => chat.last_message.clone(),
                        };
                        ui.add(
                            egui::Label::new(egui::RichText::new(preview).size(13.0).color(Palette::TEXT_SECONDARY))
                                .truncate(),
                        );
                        if chat.unread > 0 {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                Badge::count(chat.unread).show(ui);
                            });
                        }
                    });
                });
            });
        });

    let response = ui.interact(row.response.rect, ui.id().with(("chat_row", chat.id)), Sense::click());
    if response.hovered() && !is_selected {
        ui.painter().rect_stroke(
            response.rect,
            Rounding::ZERO,
            egui::Stroke::new(1.0, Palette::surface_elevated(ui.visuals())),
        );
    }

    if response.clicked() {
        tracing::info!("Selected chat: {}", chat.name);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_switch_collections() {
        let store = MessengerStore::seeded();
        let mut state = ChatListState::default();
        assert_eq!(state.visible(&store).len(), 8);

        state.tab = ListTab::Channels;
        assert_eq!(state.visible(&store).len(), 4);
        assert!(state.visible(&store).iter().all(|c| c.is_channel()));
    }

    #[test]
    fn test_search_applies_to_active_tab() {
        let store = MessengerStore::seeded();
        let mut state = ChatListState {
            search: "Анна".to_string(),
            tab: ListTab::Chats,
        };
        let found = state.visible(&store);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Анна Иванова");

        state.tab = ListTab::Channels;
        assert!(state.visible(&store).is_empty());

        state.search = "xyz".to_string();
        state.tab = ListTab::Chats;
        assert!(state.visible(&store).is_empty());
    }
}
