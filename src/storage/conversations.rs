//! Chat and channel records

use once_cell::sync::Lazy;

/// Identifier shared by chats and channels
pub type ChatId = u32;

/// What kind of conversation a list entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    /// 1:1 conversation
    Direct,
    /// Group conversation
    Group { members: u32 },
    /// Broadcast channel
    Channel { subscribers: u32 },
}

/// A chat or channel as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: ChatId,

    /// Display name
    pub name: String,

    /// Last message preview
    pub last_message: String,

    /// Display time of the last message ("14:32", "Вчера")
    pub time: String,

    /// Unread message count
    pub unread: u32,

    /// Whether the peer is online (direct chats only)
    pub online: bool,

    /// Avatar glyph: initials or an emoji
    pub avatar: String,

    pub kind: ChatKind,

    /// Verified badge (channels)
    pub verified: bool,

    /// Premium badge (channels)
    pub premium: bool,
}

impl Chat {
    fn direct(id: ChatId, name: &str, last: &str, time: &str, unread: u32, online: bool, avatar: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            last_message: last.to_string(),
            time: time.to_string(),
            unread,
            online,
            avatar: avatar.to_string(),
            kind: ChatKind::Direct,
            verified: false,
            premium: false,
        }
    }

    fn group(id: ChatId, name: &str, last: &str, time: &str, unread: u32, avatar: &str, members: u32) -> Self {
        Self {
            kind: ChatKind::Group { members },
            ..Self::direct(id, name, last, time, unread, true, avatar)
        }
    }

    fn channel(id: ChatId, name: &str, last: &str, time: &str, unread: u32, avatar: &str, subscribers: u32) -> Self {
        Self {
            kind: ChatKind::Channel { subscribers },
            ..Self::direct(id, name, last, time, unread, false, avatar)
        }
    }

    fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ChatKind::Group { .. })
    }

    pub fn is_channel(&self) -> bool {
        matches!(self.kind, ChatKind::Channel { .. })
    }

    /// Presence line shown under the name in headers
    pub fn presence_label(&self) -> String {
        match self.kind {
            ChatKind::Direct if self.online => "онлайн".to_string(),
            ChatKind::Direct => "был(а) недавно".to_string(),
            ChatKind::Group { members } => format!("{} участников", members),
            ChatKind::Channel { subscribers } => {
                format!("{} подписчиков", format_compact_count(subscribers))
            }
        }
    }
}

/// Format large counts the way channel headers show them: 950, 48.2K, 1.3M
pub fn format_compact_count(count: u32) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Keep entries whose name contains `query`, ignoring case, preserving their order
pub fn filter_by_name<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    let query = query.to_lowercase();
    chats
        .iter()
        .filter(|chat| chat.name.to_lowercase().contains(&query))
        .collect()
}

static SEED_CHATS: Lazy<Vec<Chat>> = Lazy::new(|| {
    vec![
        Chat::direct(1, "Анна Иванова", "Привет! Как дела?", "14:32", 3, true, "АИ"),
        Chat::group(2, "Команда разработки", "Дмитрий: Отправил макеты", "13:45", 5, "👥", 8),
        Chat::direct(3, "Дмитрий Петров", "Созвонимся вечером?", "13:15", 0, true, "ДП"),
        Chat::group(4, "Семья ❤️", "Мама: Не забудь позвонить", "12:20", 2, "👨‍👩‍👧", 5),
        Chat::direct(5, "Елена Смирнова", "Спасибо за помощь!", "11:48", 1, false, "ЕС"),
        Chat::direct(6, "Игорь Козлов", "Отправил файлы", "Вчера", 0, true, "ИК"),
        Chat::group(7, "Спортзал 💪", "Алексей: Тренировка в 19:00", "Вчера", 0, "🏋️", 12),
        Chat::direct(8, "Мария Васильева", "До встречи!", "Вчера", 0, false, "МВ"),
    ]
});

static SEED_CHANNELS: Lazy<Vec<Chat>> = Lazy::new(|| {
    vec![
        Chat::channel(101, "Новости технологий", "Вышел новый релиз Rust", "15:10", 12, "📰", 125_400)
            .verified(),
        Chat::channel(102, "Дизайн и UX", "Подборка лучших интерфейсов недели", "12:05", 3, "🎨", 48_200)
            .premium(),
        Chat::channel(103, "Премиум Музыка", "Новый плейлист уже доступен", "Вчера", 0, "🎵", 1_340_000)
            .verified()
            .premium(),
        Chat::channel(104, "Путешествия", "Топ-10 мест для отдыха осенью", "Вчера", 0, "✈️", 950),
    ]
});

/// Seed chats (direct and group)
pub fn seed_chats() -> Vec<Chat> {
    SEED_CHATS.clone()
}

/// Seed channels
pub fn seed_channels() -> Vec<Chat> {
    SEED_CHANNELS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chats: &[&Chat]) -> Vec<String> {
        chats.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_filter_single_match() {
        let chats = seed_chats();
        let found = filter_by_name(&chats, "Анна");
        assert_eq!(names(&found), vec!["Анна Иванова"]);
    }

    #[test]
    fn test_filter_no_match() {
        let chats = seed_chats();
        assert!(filter_by_name(&chats, "xyz").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let chats = seed_chats();
        let upper = filter_by_name(&chats, "АННА");
        let lower = filter_by_name(&chats, "анна");
        assert_eq!(names(&upper), vec!["Анна Иванова"]);
        assert_eq!(names(&lower), vec!["Анна Иванова"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let chats = seed_chats();
        // "ов" appears in Иванова, Петров, Смирнова, Козлов
        let found = filter_by_name(&chats, "ов");
        let ids: Vec<ChatId> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 6]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let chats = seed_chats();
        assert_eq!(filter_by_name(&chats, "").len(), chats.len());
    }

    #[test]
    fn test_channels_filter_independently() {
        let channels = seed_channels();
        let found = filter_by_name(&channels, "дизайн");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 102);
        assert!(found[0].premium);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<ChatId> = seed_chats()
            .iter()
            .chain(seed_channels().iter())
            .map(|c| c.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(format_compact_count(950), "950");
        assert_eq!(format_compact_count(48_200), "48.2K");
        assert_eq!(format_compact_count(1_340_000), "1.3M");
    }

    #[test]
    fn test_presence_label() {
        let chats = seed_chats();
        assert_eq!(chats[0].presence_label(), "онлайн");
        assert_eq!(chats[1].presence_label(), "8 участников");
        assert_eq!(chats[4].presence_label(), "был(а) недавно");
    }
}
