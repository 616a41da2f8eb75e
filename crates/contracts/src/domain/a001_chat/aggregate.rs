use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sequence number of a message inside one conversation (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChatMessageId(pub u32);

impl ChatMessageId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ChatMessageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(ChatMessageId::new)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Single letter shown in the avatar bubble
    pub fn avatar_letter(&self) -> &'static str {
        match self {
            Sender::User => "U",
            Sender::Bot => "B",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Sender::User)
    }
}

/// One line of the chat transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: ChatMessageId, sender: Sender, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp,
        }
    }

    pub fn user(id: ChatMessageId, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, Sender::User, text.into(), timestamp)
    }

    pub fn bot(id: ChatMessageId, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, Sender::Bot, text.into(), timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_wire_names() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::Bot.as_str(), "bot");
    }

    #[test]
    fn test_avatar_letters() {
        assert_eq!(Sender::User.avatar_letter(), "U");
        assert_eq!(Sender::Bot.avatar_letter(), "B");
    }

    #[test]
    fn test_message_id_string_form() {
        let id = ChatMessageId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(ChatMessageId::from_string("42"), Ok(id));
        assert!(ChatMessageId::from_string("abc").is_err());
    }
}
