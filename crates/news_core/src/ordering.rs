use std::cmp::Ordering;

use crate::contract::{StoredRecord, NEWS_ID_ATTRIBUTE};

/// Returns the string `news_id` of a record. Non-string ids count as absent.
pub fn news_id_of(record: &StoredRecord) -> Option<&str> {
    record.get(NEWS_ID_ATTRIBUTE).and_then(|value| value.as_s())
}

/// Orders records newest first by `news_id`.
///
/// Records without an id go after every record that has one and keep their
/// input order among themselves.
pub fn sort_newest_first(records: &mut [StoredRecord]) {
    records.sort_by(|left, right| compare_newest_first(news_id_of(left), news_id_of(right)));
}

fn compare_newest_first(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
