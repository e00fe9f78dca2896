//! UI Views - different screens/pages of the application

pub mod auth;
pub mod call;
pub mod chat_list;
pub mod chat_view;
pub mod main_view;
pub mod premium;
pub mod privacy;
pub mod profile;
pub mod stats;
pub mod video_call;

use crate::storage::conversations::ChatId;

/// The screen occupying the main pane. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Nothing selected; shows the empty state next to the chat list
    ChatList,
    /// Message thread of one chat or channel
    Chat(ChatId),
    /// Voice call with the peer of a chat
    Call(ChatId),
    /// Video call with the peer of a chat
    VideoCall(ChatId),
    Profile,
    /// Premium subscription modal (over the profile)
    Premium,
    Stats,
    Privacy,
}

impl Default for ActiveView {
    fn default() -> Self {
        Self::ChatList
    }
}

impl ActiveView {
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call(_) | Self::VideoCall(_))
    }
}
