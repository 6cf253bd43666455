use serde::{Deserialize, Serialize};

/// A submitted message as it travels over the relay.
///
/// Both fields are required for the message to be persisted; a message with
/// an empty `username` or `message` is dropped by the relay server rather
/// than stored. A `Message` carries no identity beyond its content and is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub username: String,
    pub message: String,
}

impl Message {
    pub fn new(username: &str, message: &str) -> Self {
        Self {
            username: username.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether both fields are present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.message.is_empty()
    }
}

/// The store-facing document: a decoded message enriched with the server's
/// local timestamp at insert time.
///
/// The `date` format is `YYYY-MM-DD HH:MM:SS.ffffff` with microsecond
/// precision. Serialized to JSON for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub username: String,
    pub message: String,
}

impl Record {
    /// Stamp a message with the current local time.
    pub fn from_message(msg: Message) -> Self {
        Self {
            date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            username: msg.username,
            message: msg.message,
        }
    }
}
