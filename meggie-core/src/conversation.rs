//! An in-memory chat session with Meggie.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::orchestrator::Meggie;
use crate::replies;

/// Unique message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn meggie(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only transcript, opened with Meggie's welcome.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::meggie(replies::WELCOME)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Record the user's message, ask Meggie, and record her reply.
    pub async fn send(&mut self, meggie: &Meggie, text: &str) -> &Message {
        self.messages.push(Message::user(text));
        let reply = meggie.respond(text).await;
        self.messages.push(Message::meggie(reply));
        &self.messages[self.messages.len() - 1]
    }
}
