use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// A point in time paired with a text payload
///
/// Tags carry their display name, commits their message.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TimestampedRecord {
    timestamp: DateTime<FixedOffset>,
    content: String,
}

impl TimestampedRecord {
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
