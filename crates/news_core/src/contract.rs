use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{ClockError, NanosClock, NewsIdGenerator};

pub const NEWS_ID_ATTRIBUTE: &str = "news_id";
pub const TIMESTAMP_ATTRIBUTE: &str = "timestamp";
pub const TEXT_ATTRIBUTE: &str = "text";
pub const NEWS_REQUEST_FIELD: &str = "news";

/// A single attribute value, tagged the way the table encodes it.
///
/// Serializes as a one-key object such as `{"S": "hello"}` so read responses
/// keep the stored shape instead of flattening records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoredAttribute {
    #[serde(rename = "S")]
    S(String),
    #[serde(rename = "N")]
    N(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    /// Base64 text of a binary value.
    #[serde(rename = "B")]
    B(String),
    #[serde(rename = "BS")]
    Bs(Vec<String>),
    #[serde(rename = "L")]
    L(Vec<StoredAttribute>),
    #[serde(rename = "M")]
    M(BTreeMap<String, StoredAttribute>),
}

impl StoredAttribute {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(value) => Some(value),
            _ => None,
        }
    }
}

pub type StoredRecord = BTreeMap<String, StoredAttribute>;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewsEntry {
    pub news_id: String,
    pub timestamp: String,
    pub text: String,
}

impl NewsEntry {
    /// Builds a fresh entry for `text`.
    ///
    /// `news_id` and `timestamp` come from two separate clock reads, so they
    /// may differ by a few nanoseconds.
    pub fn create<C: NanosClock>(
        text: impl Into<String>,
        ids: &NewsIdGenerator<C>,
    ) -> Result<Self, ClockError> {
        let news_id = ids.next_id()?;
        let timestamp = ids.clock().now_nanos()?.to_string();
        Ok(Self {
            news_id,
            timestamp,
            text: text.into(),
        })
    }

    pub fn to_record(&self) -> StoredRecord {
        StoredRecord::from([
            (
                NEWS_ID_ATTRIBUTE.to_string(),
                StoredAttribute::S(self.news_id.clone()),
            ),
            (
                TIMESTAMP_ATTRIBUTE.to_string(),
                StoredAttribute::S(self.timestamp.clone()),
            ),
            (
                TEXT_ATTRIBUTE.to_string(),
                StoredAttribute::S(self.text.clone()),
            ),
        ])
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request format")]
    InvalidFormat(#[source] serde_json::Error),
    #[error("Missing 'news' field")]
    MissingNews,
}

/// Extracts the `news` text from a post body.
///
/// The body must be a JSON object of string values. A literal `null` reads as
/// an empty object and a `null` value reads as an empty string. Other keys are
/// ignored and the text is returned verbatim.
pub fn parse_post_request(body: &str) -> Result<String, RequestError> {
    let fields: Option<HashMap<String, Option<String>>> =
        serde_json::from_str(body).map_err(RequestError::InvalidFormat)?;

    fields
        .unwrap_or_default()
        .remove(NEWS_REQUEST_FIELD)
        .map(Option::unwrap_or_default)
        .ok_or(RequestError::MissingNews)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FrozenClock(i64);

    impl NanosClock for FrozenClock {
        fn now_nanos(&self) -> Result<i64, ClockError> {
            Ok(self.0)
        }
    }

    #[test]
    fn create_reads_the_clock_for_id_and_timestamp() {
        let ids = NewsIdGenerator::new(FrozenClock(1_700_000_000_000_000_000));
        let entry = NewsEntry::create("hello", &ids).expect("entry should be created");

        assert_eq!(entry.news_id, "1700000000000000000");
        assert_eq!(entry.timestamp, "1700000000000000000");
        assert_eq!(entry.text, "hello");
    }

    #[test]
    fn stored_attribute_serializes_with_type_tag() {
        let record = StoredRecord::from([
            ("news_id".to_string(), StoredAttribute::S("42".to_string())),
            ("views".to_string(), StoredAttribute::N("7".to_string())),
            ("pinned".to_string(), StoredAttribute::Bool(true)),
        ]);

        let json = serde_json::to_string(&record).expect("record should serialize");
        assert_eq!(
            json,
            r#"{"news_id":{"S":"42"},"pinned":{"BOOL":true},"views":{"N":"7"}}"#
        );
    }

    #[test]
    fn nested_attributes_keep_their_tags() {
        let value = StoredAttribute::M(BTreeMap::from([(
            "tags".to_string(),
            StoredAttribute::L(vec![
                StoredAttribute::S("a".to_string()),
                StoredAttribute::Null(true),
            ]),
        )]));

        let json = serde_json::to_value(&value).expect("attribute should serialize");
        assert_eq!(
            json,
            serde_json::json!({"M": {"tags": {"L": [{"S": "a"}, {"NULL": true}]}}})
        );
    }

    #[test]
    fn entry_record_uses_string_attributes() {
        let entry = NewsEntry {
            news_id: "100".to_string(),
            timestamp: "101".to_string(),
            text: "hello".to_string(),
        };

        let record = entry.to_record();
        assert_eq!(record.len(), 3);
        assert_eq!(record["news_id"].as_s(), Some("100"));
        assert_eq!(record["timestamp"].as_s(), Some("101"));
        assert_eq!(record["text"].as_s(), Some("hello"));
    }

    #[test]
    fn parse_post_request_returns_news_verbatim() {
        let text = parse_post_request(r#"{"news":"  hello  ","author":"ignored"}"#)
            .expect("request should pass");
        assert_eq!(text, "  hello  ");
    }

    #[test]
    fn parse_post_request_accepts_empty_news() {
        let text = parse_post_request(r#"{"news":""}"#).expect("request should pass");
        assert_eq!(text, "");
    }

    #[test]
    fn parse_post_request_rejects_missing_news() {
        let error = parse_post_request("{}").expect_err("request should fail");
        assert!(matches!(error, RequestError::MissingNews));
        assert_eq!(error.to_string(), "Missing 'news' field");
    }

    #[test]
    fn parse_post_request_treats_null_as_empty_object() {
        let error = parse_post_request("null").expect_err("request should fail");
        assert!(matches!(error, RequestError::MissingNews));
    }

    #[test]
    fn parse_post_request_reads_null_news_as_empty_text() {
        let text = parse_post_request(r#"{"news":null}"#).expect("request should pass");
        assert_eq!(text, "");
    }

    #[test]
    fn binary_attributes_serialize_as_base64_text() {
        let json = serde_json::to_value(StoredAttribute::B("AQID".to_string()))
            .expect("attribute should serialize");
        assert_eq!(json, serde_json::json!({"B": "AQID"}));
    }

    #[test]
    fn parse_post_request_rejects_non_json() {
        let error = parse_post_request("not json").expect_err("request should fail");
        assert!(matches!(error, RequestError::InvalidFormat(_)));
        assert_eq!(error.to_string(), "Invalid request format");
    }

    #[test]
    fn parse_post_request_rejects_non_string_values() {
        let error = parse_post_request(r#"{"news": 5}"#).expect_err("request should fail");
        assert!(matches!(error, RequestError::InvalidFormat(_)));
    }
}
