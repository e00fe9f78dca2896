//! Message transcripts

use chrono::{Local, NaiveTime};
use once_cell::sync::Lazy;

/// A single message in a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    /// Display time, `HH:MM`
    pub time: String,
    pub is_mine: bool,
}

impl Message {
    fn new(id: u64, text: &str, time: &str, is_mine: bool) -> Self {
        Self {
            id,
            text: text.to_string(),
            time: time.to_string(),
            is_mine,
        }
    }
}

static OPENING_CONVERSATION: Lazy<Vec<Message>> = Lazy::new(|| {
    vec![
        Message::new(1, "Привет! Как дела?", "14:30", false),
        Message::new(2, "Отлично! А у тебя?", "14:31", true),
        Message::new(3, "Тоже хорошо! Хочу обсудить проект", "14:32", false),
        Message::new(4, "Конечно, давай созвонимся?", "14:32", true),
    ]
});

/// Append-only list of messages for one chat
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// The fixed conversation the first chat opens with
    pub fn opening_conversation() -> Self {
        Self {
            messages: OPENING_CONVERSATION.clone(),
        }
    }

    /// A transcript holding one received message
    pub fn with_received(text: &str, time: &str) -> Self {
        Self {
            messages: vec![Message::new(1, text, time, false)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Send a message stamped with the current local time
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        self.send_at(text, Local::now().time())
    }

    /// Append `text` as an outgoing message sent at `time`.
    ///
    /// Text that is empty after trimming is ignored and `None` is returned.
    pub fn send_at(&mut self, text: &str, time: NaiveTime) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            text: text.to_string(),
            time: format_clock(time),
            is_mine: true,
        });
        self.messages.last()
    }
}

/// Format a wall-clock time as `HH:MM`
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_opening_conversation() {
        let transcript = Transcript::opening_conversation();
        assert_eq!(transcript.len(), 4);
        assert!(!transcript.messages()[0].is_mine);
        assert!(transcript.messages()[1].is_mine);
    }

    #[test]
    fn test_send_appends_one_message() {
        let mut transcript = Transcript::opening_conversation();
        let sent = transcript.send_at("Договорились", at(9, 5)).cloned().unwrap();

        assert_eq!(transcript.len(), 5);
        assert_eq!(sent.id, 5);
        assert_eq!(sent.text, "Договорились");
        assert_eq!(sent.time, "09:05");
        assert!(sent.is_mine);
        assert_eq!(transcript.messages().last(), Some(&sent));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let mut transcript = Transcript::opening_conversation();
        assert!(transcript.send_at("", at(10, 0)).is_none());
        assert!(transcript.send_at("   \n\t ", at(10, 0)).is_none());
        assert_eq!(transcript.len(), 4);
    }

    #[test]
    fn test_text_is_kept_as_typed() {
        let mut transcript = Transcript::default();
        let sent = transcript.send_at("  привет ", at(23, 59)).cloned().unwrap();
        assert_eq!(sent.text, "  привет ");
        assert_eq!(sent.time, "23:59");
        assert_eq!(sent.id, 1);
    }

    #[test]
    fn test_order_is_append_only() {
        let mut transcript = Transcript::with_received("До встречи!", "Вчера");
        transcript.send_at("первое", at(12, 0));
        transcript.send_at("второе", at(12, 1));

        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["До встречи!", "первое", "второе"]);
    }

    #[test]
    fn test_send_uses_local_clock() {
        let mut transcript = Transcript::default();
        let sent = transcript.send("сейчас").cloned().unwrap();
        assert_eq!(sent.time.len(), 5);
        assert_eq!(&sent.time[2..3], ":");
    }
}
