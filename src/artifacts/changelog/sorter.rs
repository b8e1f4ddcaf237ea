use crate::artifacts::changelog::record::TimestampedRecord;

/// Sort records newest first
///
/// Records sharing a timestamp end up in no particular relative order.
pub fn sort_newest_first(mut records: Vec<TimestampedRecord>) -> Vec<TimestampedRecord> {
    records.sort_unstable_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    records
}
