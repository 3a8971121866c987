//! Query assistant session state.
//!
//! A session is an append-only transcript plus at most one pending query.
//! `submit()` records the user's message and marks the session busy;
//! `deliver()` answers it. Between the two, further submits are refused.

use chrono::{DateTime, Utc};
use tracing::debug;

use healthhub_contracts::{
    chat::{ChatMessage, Role},
    error::{HealthHubError, HealthHubResult},
};

use crate::traits::Responder;

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: Option<String>,
}

impl ChatSession {
    /// Start a transcript with the assistant's greeting.
    pub fn new(greeting: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, greeting, now)],
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a user query.
    ///
    /// Whitespace-only input is ignored and returns `Ok(None)`. The content is
    /// stored exactly as typed.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> HealthHubResult<Option<&ChatMessage>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if self.pending.is_some() {
            return Err(HealthHubError::RequestInFlight { operation: "query".to_string() });
        }

        debug!(chars = text.len(), "query submitted");
        self.pending = Some(text.to_string());
        self.messages.push(ChatMessage::new(Role::User, text, now));
        Ok(self.messages.last())
    }

    /// Answer the pending query and append the reply.
    pub fn deliver(&mut self, responder: &dyn Responder, now: DateTime<Utc>) -> HealthHubResult<&ChatMessage> {
        let query = self.pending.take().ok_or_else(|| HealthHubError::NothingToAct {
            action: "answer".to_string(),
        })?;

        let reply = responder.respond(&query);
        self.messages.push(ChatMessage::new(Role::Assistant, reply, now));
        Ok(&self.messages[self.messages.len() - 1])
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use healthhub_contracts::{chat::Role, error::HealthHubError};

    use crate::traits::Responder;

    use super::ChatSession;

    struct EchoResponder;

    impl Responder for EchoResponder {
        fn respond(&self, query: &str) -> String {
            format!("echo: {}", query)
        }
    }

    fn session() -> ChatSession {
        ChatSession::new("hello", Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_starts_with_greeting() {
        let s = session();
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, Role::Assistant);
        assert_eq!(s.messages()[0].content, "hello");
        assert!(!s.is_pending());
    }

    #[test]
    fn test_whitespace_query_is_noop() {
        let mut s = session();
        for text in ["", "   ", "\n\t "] {
            assert!(s.submit(text, Utc::now()).unwrap().is_none());
        }
        assert_eq!(s.messages().len(), 1);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_submit_then_deliver() {
        let mut s = session();
        let user = s.submit("  my pain  ", Utc::now()).unwrap().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "  my pain  ");
        assert!(s.is_pending());

        let reply = s.deliver(&EchoResponder, Utc::now()).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "echo:   my pain  ");

        assert!(!s.is_pending());
        assert_eq!(s.messages().len(), 3);
    }

    #[test]
    fn test_second_submit_while_pending_is_refused() {
        let mut s = session();
        s.submit("first", Utc::now()).unwrap();

        let err = s.submit("second", Utc::now()).unwrap_err();
        assert_eq!(err, HealthHubError::RequestInFlight { operation: "query".to_string() });
        assert_eq!(s.messages().len(), 2, "refused query must not be appended");
    }

    #[test]
    fn test_deliver_without_pending_fails() {
        let mut s = session();
        assert!(matches!(
            s.deliver(&EchoResponder, Utc::now()),
            Err(HealthHubError::NothingToAct { .. })
        ));
    }

    #[test]
    fn test_transcript_order_is_preserved() {
        let mut s = session();
        for q in ["a", "b", "c"] {
            s.submit(q, Utc::now()).unwrap();
            s.deliver(&EchoResponder, Utc::now()).unwrap();
        }
        let contents: Vec<&str> = s.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hello", "a", "echo: a", "b", "echo: b", "c", "echo: c"]);
    }
}
