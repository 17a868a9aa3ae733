#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the chat panel.
///
/// Messages live only in memory for the current session; the panel does not
/// call a backend endpoint.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub from_user: bool,
    pub timestamp: f64,
}

impl ChatState {
    /// Append a message from the user. Whitespace-only input is ignored.
    pub fn push_user_message(&mut self, content: &str, timestamp: f64) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.to_owned(),
            from_user: true,
            timestamp,
        });
    }
}
