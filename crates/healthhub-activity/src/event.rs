//! Activity feed entry types.
//!
//! `ActivityEvent` is one recorded operation with its position in the feed.
//! `ActivityFeed` is a point-in-time export of the whole feed, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use healthhub_contracts::dashboard::{ActivityKind, NewActivity};

use crate::age::describe_age;

/// One entry in the dashboard's "recent activity" list.
///
/// Events are never mutated or removed once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Position in the feed, starting at 0 with no gaps.
    pub sequence: u64,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// When the operation happened (not when it was recorded).
    pub at: DateTime<Utc>,
}

impl ActivityEvent {
    pub(crate) fn from_new(sequence: u64, activity: NewActivity) -> Self {
        Self {
            sequence,
            kind: activity.kind,
            title: activity.title,
            description: activity.description,
            at: activity.at,
        }
    }

    /// Relative age label as shown on the dashboard.
    pub fn age(&self, now: DateTime<Utc>) -> String {
        describe_age(now, self.at)
    }
}

/// Snapshot of the feed, most recent event first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeed {
    pub events: Vec<ActivityEvent>,
    pub exported_at: DateTime<Utc>,
}
