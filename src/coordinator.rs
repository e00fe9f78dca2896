//! Screen state machine
//!
//! [`ViewCoordinator`] owns everything the screens read and write: the store,
//! the toast queue, the running call and per-screen drafts. Every screen change
//! goes through [`ViewCoordinator::transition`], which is where a call session
//! is dropped (and its timer stopped) once the user leaves the call screen.

use crate::services::notifications::ToastQueue;
use crate::storage::conversations::{Chat, ChatId};
use crate::storage::settings::{AppConfig, PrivacySettings};
use crate::storage::MessengerStore;
use crate::ui::views::auth::{AuthError, AuthForm};
use crate::ui::views::call::{CallKind, CallSession};
use crate::ui::views::chat_list::ChatListState;
use crate::ui::views::chat_view::ChatViewState;
use crate::ui::views::premium::PremiumPlan;
use crate::ui::views::ActiveView;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct ViewCoordinator {
    runtime: Handle,
    store: MessengerStore,
    toasts: ToastQueue,
    active: ActiveView,
    selected_chat: Option<ChatId>,
    authenticated: bool,
    auth_form: AuthForm,
    chat_list: ChatListState,
    chat_view: ChatViewState,
    call: Option<CallSession>,
    privacy_draft: PrivacySettings,
}

impl ViewCoordinator {
    pub fn new(config: &AppConfig, runtime: Handle) -> Self {
        let toasts = ToastQueue::new(Duration::from_secs(config.toast_duration_secs))
            .with_desktop_mirror(config.desktop_notifications);

        if config.skip_auth {
            tracing::info!("Sign-in skipped by configuration");
        }

        Self {
            runtime,
            store: MessengerStore::seeded(),
            toasts,
            active: ActiveView::ChatList,
            selected_chat: None,
            authenticated: config.skip_auth,
            auth_form: AuthForm::default(),
            chat_list: ChatListState::default(),
            chat_view: ChatViewState::default(),
            call: None,
            privacy_draft: PrivacySettings::default(),
        }
    }

    /// Switch the main pane to `next`
    fn transition(&mut self, next: ActiveView) {
        if self.active == next {
            return;
        }
        if self.active.is_call() && self.call.take().is_some() {
            tracing::debug!("Call session closed");
        }
        tracing::debug!("View {:?} -> {:?}", self.active, next);
        self.active = next;
    }

    // Accessors

    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn selected_chat(&self) -> Option<ChatId> {
        self.selected_chat
    }

    pub fn store(&self) -> &MessengerStore {
        &self.store
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    pub fn call(&self) -> Option<&CallSession> {
        self.call.as_ref()
    }

    pub fn call_mut(&mut self) -> Option<&mut CallSession> {
        self.call.as_mut()
    }

    pub fn chat_list_mut(&mut self) -> &mut ChatListState {
        &mut self.chat_list
    }

    /// Rows of the chat list for the current tab and search text
    pub fn visible_chats(&self) -> Vec<&Chat> {
        self.chat_list.visible(&self.store)
    }

    pub fn chat_view_mut(&mut self) -> &mut ChatViewState {
        &mut self.chat_view
    }

    pub fn privacy_draft_mut(&mut self) -> &mut PrivacySettings {
        &mut self.privacy_draft
    }

    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    // Chats

    /// Open a chat or channel. Unknown ids are ignored.
    pub fn select_chat(&mut self, id: ChatId) {
        if self.store.chat(id).is_none() {
            tracing::warn!("Ignoring selection of unknown chat {}", id);
            return;
        }
        if self.selected_chat != Some(id) {
            self.chat_view = ChatViewState::default();
        }
        self.selected_chat = Some(id);
        self.transition(ActiveView::Chat(id));
    }

    pub fn close_chat(&mut self) {
        if let ActiveView::Chat(_) = self.active {
            self.selected_chat = None;
            self.chat_view = ChatViewState::default();
            self.transition(ActiveView::ChatList);
        }
    }

    /// Send the composer draft to the open chat. Returns true when a message
    /// was appended; blank drafts are left untouched.
    pub fn send_message(&mut self) -> bool {
        let ActiveView::Chat(id) = self.active else {
            return false;
        };
        let Some(transcript) = self.store.transcript_mut(id) else {
            return false;
        };

        match transcript.send(&self.chat_view.draft) {
            Some(message) => {
                tracing::info!("Sent message {} to chat {}", message.id, id);
                self.chat_view.draft.clear();
                true
            }
            None => false,
        }
    }

    // Calls

    pub fn start_call(&mut self) {
        self.begin_call(CallKind::Voice);
    }

    pub fn start_video_call(&mut self) {
        self.begin_call(CallKind::Video);
    }

    fn begin_call(&mut self, kind: CallKind) {
        let ActiveView::Chat(id) = self.active else {
            tracing::warn!("Cannot start a call outside a chat");
            return;
        };

        let next = match kind {
            CallKind::Voice => ActiveView::Call(id),
            CallKind::Video => ActiveView::VideoCall(id),
        };
        self.transition(next);
        self.call = Some(CallSession::start(id, kind, &self.runtime));
    }

    pub fn end_call(&mut self) {
        match self.active {
            ActiveView::Call(id) | ActiveView::VideoCall(id) => {
                if let Some(call) = &self.call {
                    tracing::info!("{:?} call with chat {} ended after {}", call.kind, id, call.duration());
                }
                self.transition(ActiveView::Chat(id));
            }
            _ => {}
        }
    }

    // Profile and its panels

    pub fn show_profile(&mut self) {
        self.transition(ActiveView::Profile);
    }

    pub fn close_profile(&mut self) {
        if self.active != ActiveView::Profile {
            return;
        }
        let next = match self.selected_chat {
            Some(id) => ActiveView::Chat(id),
            None => ActiveView::ChatList,
        };
        self.transition(next);
    }

    pub fn show_premium(&mut self) {
        self.open_panel(ActiveView::Premium);
    }

    pub fn close_premium(&mut self) {
        self.close_panel(ActiveView::Premium);
    }

    /// Pick a premium plan. There is no payment step; the choice is
    /// acknowledged and the modal closes.
    pub fn subscribe(&mut self, plan: PremiumPlan) {
        if self.active != ActiveView::Premium {
            return;
        }
        tracing::info!("Subscribed to {} plan", plan.tag());
        self.toasts.push(
            "Premium подключен",
            format!("{}: {}₽", plan.title(), plan.price_rub()),
        );
        self.transition(ActiveView::Profile);
    }

    pub fn show_stats(&mut self) {
        self.open_panel(ActiveView::Stats);
    }

    pub fn close_stats(&mut self) {
        self.close_panel(ActiveView::Stats);
    }

    /// Open privacy settings with a fresh draft
    pub fn show_privacy(&mut self) {
        if self.active == ActiveView::Profile {
            self.privacy_draft = PrivacySettings::default();
        }
        self.open_panel(ActiveView::Privacy);
    }

    pub fn close_privacy(&mut self) {
        self.close_panel(ActiveView::Privacy);
    }

    pub fn save_privacy(&mut self) {
        if self.active != ActiveView::Privacy {
            return;
        }
        tracing::info!("Privacy settings saved: {:?}", self.privacy_draft);
        self.toasts
            .push("Настройки сохранены", "Ваши настройки приватности обновлены");
    }

    fn open_panel(&mut self, panel: ActiveView) {
        if self.active == ActiveView::Profile {
            self.transition(panel);
        }
    }

    fn close_panel(&mut self, panel: ActiveView) {
        if self.active == panel {
            self.transition(ActiveView::Profile);
        }
    }

    pub fn sync_contact(&mut self, index: usize) {
        let name = self.store.contacts().get(index).map(|c| c.name.clone());
        if self.store.sync_contact(index) {
            let name = name.unwrap_or_default();
            tracing::info!("Invited contact {}", name);
            self.toasts.push("Приглашение отправлено", name);
        }
    }

    pub fn sync_all_contacts(&mut self) {
        let changed = self.store.sync_all_contacts();
        if changed > 0 {
            tracing::info!("Synced {} contacts", changed);
            self.toasts
                .push("Контакты синхронизированы", format!("Добавлено контактов: {}", changed));
        }
    }

    // Session

    /// Validate the sign-in form and open the app on success
    pub fn submit_auth(&mut self) -> Result<(), AuthError> {
        if let Err(e) = self.auth_form.validate() {
            self.auth_form.error = Some(e.clone());
            return Err(e);
        }

        tracing::info!("Signed in as {}", self.auth_form.email.trim());
        self.auth_form.error = None;
        self.auth_form.password.clear();
        self.authenticated = true;
        self.transition(ActiveView::ChatList);
        Ok(())
    }

    /// Sign out and discard all session state
    pub fn logout(&mut self) {
        tracing::info!("Signed out");
        self.transition(ActiveView::ChatList);
        self.authenticated = false;
        self.selected_chat = None;
        self.store = MessengerStore::seeded();
        self.auth_form = AuthForm::default();
        self.chat_list = ChatListState::default();
        self.chat_view = ChatViewState::default();
        self.privacy_draft = PrivacySettings::default();
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::settings::Visibility;

    fn coordinator() -> ViewCoordinator {
        let config = AppConfig {
            skip_auth: true,
            ..Default::default()
        };
        ViewCoordinator::new(&config, Handle::current())
    }

    #[tokio::test]
    async fn test_starts_on_chat_list() {
        let coordinator = coordinator();
        assert_eq!(coordinator.active(), ActiveView::ChatList);
        assert!(coordinator.is_authenticated());
        assert!(coordinator.selected_chat().is_none());
    }

    #[tokio::test]
    async fn test_requires_sign_in_by_default() {
        let coordinator = ViewCoordinator::new(&AppConfig::default(), Handle::current());
        assert!(!coordinator.is_authenticated());
    }

    #[tokio::test]
    async fn test_select_and_close_chat() {
        let mut coordinator = coordinator();
        coordinator.select_chat(3);
        assert_eq!(coordinator.active(), ActiveView::Chat(3));
        assert_eq!(coordinator.selected_chat(), Some(3));

        coordinator.close_chat();
        assert_eq!(coordinator.active(), ActiveView::ChatList);
        assert!(coordinator.selected_chat().is_none());
    }

    #[tokio::test]
    async fn test_unknown_chat_is_ignored() {
        let mut coordinator = coordinator();
        coordinator.select_chat(2);
        coordinator.select_chat(999);
        assert_eq!(coordinator.active(), ActiveView::Chat(2));
    }

    #[tokio::test]
    async fn test_send_message() {
        let mut coordinator = coordinator();
        coordinator.select_chat(1);

        coordinator.chat_view_mut().draft = "  \n ".to_string();
        assert!(!coordinator.send_message());
        assert_eq!(coordinator.store().transcript(1).unwrap().len(), 4);

        coordinator.chat_view_mut().draft = "Во сколько?".to_string();
        assert!(coordinator.send_message());
        assert!(coordinator.chat_view_mut().draft.is_empty());

        let transcript = coordinator.store().transcript(1).unwrap();
        assert_eq!(transcript.len(), 5);
        let last = &transcript.messages()[4];
        assert_eq!(last.text, "Во сколько?");
        assert!(last.is_mine);
    }

    #[tokio::test]
    async fn test_send_outside_chat_is_noop() {
        let mut coordinator = coordinator();
        coordinator.chat_view_mut().draft = "hello".to_string();
        assert!(!coordinator.send_message());
    }

    #[tokio::test]
    async fn test_switching_chats_clears_draft() {
        let mut coordinator = coordinator();
        coordinator.select_chat(1);
        coordinator.chat_view_mut().draft = "черновик".to_string();

        coordinator.select_chat(1);
        assert_eq!(coordinator.chat_view_mut().draft, "черновик");

        coordinator.select_chat(2);
        assert!(coordinator.chat_view_mut().draft.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_lifecycle() {
        let mut coordinator = coordinator();
        coordinator.select_chat(3);
        coordinator.start_call();
        assert_eq!(coordinator.active(), ActiveView::Call(3));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let call = coordinator.call().unwrap();
        assert_eq!(call.chat_id, 3);
        assert_eq!(call.duration(), "00:02");

        coordinator.end_call();
        assert_eq!(coordinator.active(), ActiveView::Chat(3));
        assert!(coordinator.call().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_video_call_starts_with_camera() {
        let mut coordinator = coordinator();
        coordinator.select_chat(1);
        coordinator.start_video_call();
        assert_eq!(coordinator.active(), ActiveView::VideoCall(1));

        let call = coordinator.call_mut().unwrap();
        assert_eq!(call.kind, CallKind::Video);
        assert!(call.controls.camera_on);
        call.controls.toggle_camera();
        assert!(!coordinator.call().unwrap().controls.camera_on);
    }

    #[tokio::test]
    async fn test_call_requires_open_chat() {
        let mut coordinator = coordinator();
        coordinator.start_call();
        assert_eq!(coordinator.active(), ActiveView::ChatList);
        assert!(coordinator.call().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_call_drops_session() {
        let mut coordinator = coordinator();
        coordinator.select_chat(3);
        coordinator.start_call();
        coordinator.show_profile();
        assert_eq!(coordinator.active(), ActiveView::Profile);
        assert!(coordinator.call().is_none());

        coordinator.select_chat(3);
        coordinator.start_video_call();
        coordinator.select_chat(4);
        assert_eq!(coordinator.active(), ActiveView::Chat(4));
        assert!(coordinator.call().is_none());
    }

    #[tokio::test]
    async fn test_profile_returns_to_selected_chat() {
        let mut coordinator = coordinator();
        coordinator.show_profile();
        coordinator.close_profile();
        assert_eq!(coordinator.active(), ActiveView::ChatList);

        coordinator.select_chat(5);
        coordinator.show_profile();
        coordinator.close_profile();
        assert_eq!(coordinator.active(), ActiveView::Chat(5));
    }

    #[tokio::test]
    async fn test_panels_open_from_profile_only() {
        let mut coordinator = coordinator();
        coordinator.show_stats();
        assert_eq!(coordinator.active(), ActiveView::ChatList);

        coordinator.show_profile();
        coordinator.show_stats();
        assert_eq!(coordinator.active(), ActiveView::Stats);

        // Panels are exclusive: a second panel cannot open over the first
        coordinator.show_privacy();
        assert_eq!(coordinator.active(), ActiveView::Stats);

        coordinator.close_stats();
        assert_eq!(coordinator.active(), ActiveView::Profile);
    }

    #[tokio::test]
    async fn test_subscribe_closes_premium_with_toast() {
        let mut coordinator = coordinator();
        coordinator.show_profile();
        coordinator.show_premium();
        assert_eq!(coordinator.active(), ActiveView::Premium);

        coordinator.subscribe(PremiumPlan::Yearly);
        assert_eq!(coordinator.active(), ActiveView::Profile);
        assert_eq!(coordinator.toasts().visible().last().unwrap().title, "Premium подключен");

        coordinator.subscribe(PremiumPlan::Monthly);
        assert_eq!(coordinator.toasts().visible().len(), 1);
    }

    #[tokio::test]
    async fn test_close_premium_without_subscribing() {
        let mut coordinator = coordinator();
        coordinator.show_profile();
        coordinator.show_premium();
        coordinator.close_premium();
        assert_eq!(coordinator.active(), ActiveView::Profile);
        assert!(coordinator.toasts().visible().last().is_none());
    }

    #[tokio::test]
    async fn test_save_privacy_keeps_panel_open() {
        let mut coordinator = coordinator();
        coordinator.show_profile();
        coordinator.show_privacy();
        coordinator.privacy_draft_mut().read_receipts = false;

        coordinator.save_privacy();
        assert_eq!(coordinator.active(), ActiveView::Privacy);
        let toast = coordinator.toasts().visible().last().unwrap();
        assert_eq!(toast.title, "Настройки сохранены");
        assert_eq!(toast.description, "Ваши настройки приватности обновлены");
    }

    #[tokio::test]
    async fn test_privacy_draft_resets_on_open() {
        let mut coordinator = coordinator();
        coordinator.show_profile();
        coordinator.show_privacy();
        coordinator.privacy_draft_mut().allow_calls = Visibility::Nobody;
        coordinator.close_privacy();
        assert_eq!(coordinator.active(), ActiveView::Profile);

        coordinator.show_privacy();
        assert_eq!(*coordinator.privacy_draft_mut(), PrivacySettings::default());
    }

    #[tokio::test]
    async fn test_contact_sync_toasts() {
        let mut coordinator = coordinator();
        coordinator.sync_contact(0);
        assert!(coordinator.toasts().visible().last().is_none());

        coordinator.sync_contact(2);
        assert_eq!(coordinator.toasts().visible().last().unwrap().description, "Елена Смирнова");

        coordinator.sync_all_contacts();
        assert_eq!(coordinator.toasts().visible().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_auth() {
        let mut coordinator = ViewCoordinator::new(&AppConfig::default(), Handle::current());

        assert_eq!(coordinator.submit_auth(), Err(AuthError::MissingEmail));
        assert!(!coordinator.is_authenticated());

        let form = coordinator.auth_form_mut();
        assert_eq!(form.error, Some(AuthError::MissingEmail));
        form.email = "me@example.com".to_string();
        form.password = "secret".to_string();

        assert_eq!(coordinator.submit_auth(), Ok(()));
        assert!(coordinator.is_authenticated());
        assert_eq!(coordinator.active(), ActiveView::ChatList);
        assert!(coordinator.auth_form_mut().password.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_resets_session() {
        let mut coordinator = coordinator();
        coordinator.select_chat(1);
        coordinator.chat_view_mut().draft = "новое".to_string();
        assert!(coordinator.send_message());
        coordinator.start_call();

        coordinator.logout();
        assert!(!coordinator.is_authenticated());
        assert_eq!(coordinator.active(), ActiveView::ChatList);
        assert!(coordinator.call().is_none());
        assert!(coordinator.selected_chat().is_none());
        assert_eq!(coordinator.store().transcript(1).unwrap().len(), 4);
    }
}
