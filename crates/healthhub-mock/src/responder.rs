//! The query responder: keyword groups checked in priority order, one
//! canned reply per group.

use healthhub_contracts::chat::ResponseTopic;
use healthhub_core::traits::Responder;

use crate::mock_data::{canned_response, TOPIC_KEYWORDS};

/// Case-insensitive keyword match. The first group with any hit wins.
pub fn classify(query: &str) -> ResponseTopic {
    let query = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ResponseTopic::General)
}

pub fn respond(query: &str) -> &'static str {
    canned_response(classify(query))
}

/// `Responder` over the canned replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn respond(&self, query: &str) -> String {
        respond(query).to_string()
    }
}
