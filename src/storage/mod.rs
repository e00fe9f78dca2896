//! In-memory data store
//!
//! Everything the screens display comes from [`MessengerStore`]. It is seeded
//! once on startup and lives for the whole session; nothing is written to disk.

pub mod conversations;
pub mod messages;
pub mod profile;
pub mod settings;
pub mod stats;

use conversations::{Chat, ChatId};
use messages::Transcript;
use profile::{PhoneContact, UserProfile};
use stats::UsageStats;
use std::collections::HashMap;

/// Seed-backed store owned by the view coordinator
pub struct MessengerStore {
    chats: Vec<Chat>,
    channels: Vec<Chat>,
    transcripts: HashMap<ChatId, Transcript>,
    profile: UserProfile,
    contacts: Vec<PhoneContact>,
    stats: UsageStats,
}

impl MessengerStore {
    /// Build the store from seed data
    pub fn seeded() -> Self {
        let chats = conversations::seed_chats();
        let channels = conversations::seed_channels();

        let transcripts = chats
            .iter()
            .chain(channels.iter())
            .map(|chat| {
                let transcript = if chat.id == 1 {
                    Transcript::opening_conversation()
                } else {
                    Transcript::with_received(&chat.last_message, &chat.time)
                };
                (chat.id, transcript)
            })
            .collect();

        tracing::debug!(
            "Seeded store with {} chats and {} channels",
            chats.len(),
            channels.len()
        );

        Self {
            chats,
            channels,
            transcripts,
            profile: UserProfile::default(),
            contacts: profile::seed_contacts(),
            stats: UsageStats::default(),
        }
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn channels(&self) -> &[Chat] {
        &self.channels
    }

    /// Look up a chat or channel by id
    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats
            .iter()
            .chain(self.channels.iter())
            .find(|chat| chat.id == id)
    }

    pub fn transcript(&self, id: ChatId) -> Option<&Transcript> {
        self.transcripts.get(&id)
    }

    pub fn transcript_mut(&mut self, id: ChatId) -> Option<&mut Transcript> {
        self.transcripts.get_mut(&id)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn contacts(&self) -> &[PhoneContact] {
        &self.contacts
    }

    /// Mark one phone contact as synced. Returns false for an unknown index
    /// or an already synced contact.
    pub fn sync_contact(&mut self, index: usize) -> bool {
        match self.contacts.get_mut(index) {
            Some(contact) if !contact.synced => {
                contact.synced = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every phone contact as synced, returning how many changed
    pub fn sync_all_contacts(&mut self) -> usize {
        let mut changed = 0;
        for contact in self.contacts.iter_mut().filter(|c| !c.synced) {
            contact.synced = true;
            changed += 1;
        }
        changed
    }

    pub fn stats(&self) -> &UsageStats {
        &self.stats
    }
}

impl Default for MessengerStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_has_a_transcript() {
        let store = MessengerStore::seeded();
        for chat in store.chats().iter().chain(store.channels().iter()) {
            assert!(store.transcript(chat.id).is_some(), "missing transcript for {}", chat.id);
        }
    }

    #[test]
    fn test_transcripts_vary_by_chat() {
        let store = MessengerStore::seeded();
        assert_eq!(store.transcript(1).unwrap().len(), 4);

        let petrov = store.transcript(3).unwrap();
        assert_eq!(petrov.len(), 1);
        assert_eq!(petrov.messages()[0].text, "Созвонимся вечером?");
        assert!(!petrov.messages()[0].is_mine);
    }

    #[test]
    fn test_lookup_covers_channels() {
        let store = MessengerStore::seeded();
        assert_eq!(store.chat(101).map(|c| c.name.as_str()), Some("Новости технологий"));
        assert!(store.chat(999).is_none());
    }

    #[test]
    fn test_sent_messages_stay_with_their_chat() {
        let mut store = MessengerStore::seeded();
        store.transcript_mut(3).unwrap().send("вечером удобно");

        assert_eq!(store.transcript(3).unwrap().len(), 2);
        assert_eq!(store.transcript(1).unwrap().len(), 4);
    }

    #[test]
    fn test_sync_contacts() {
        let mut store = MessengerStore::seeded();
        assert!(!store.sync_contact(0), "already synced");
        assert!(!store.sync_contact(42));
        assert!(store.sync_contact(2));
        assert!(store.contacts()[2].synced);
        assert_eq!(store.sync_all_contacts(), 0);
    }

    #[test]
    fn test_sync_all_contacts() {
        let mut store = MessengerStore::seeded();
        assert_eq!(store.sync_all_contacts(), 1);
        assert!(store.contacts().iter().all(|c| c.synced));
    }
}
