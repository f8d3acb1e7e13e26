//! Codec for composite columns stored as JSON text.
//!
//! Feature lists, screenshot URLs, social links, stats and team members live in
//! `TEXT` columns. Everything that reads or writes those columns goes through
//! this module so the storage representation can change in one place.
//!
//! On-disk shapes:
//! - lists: `["Task Management","Cloud Sync"]`
//! - maps: `{"github":"https://github.com/appland"}`
//! - records: `[{"name":"John Doe","role":"CEO","avatar":"","bio":"..."}]`

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure to encode or decode a composite field.
#[derive(Debug, Error)]
#[error("Field '{field}' holds malformed data: {source}")]
pub struct CodecError {
    pub field: &'static str,
    #[source]
    pub source: serde_json::Error,
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// How a read path reacts to corrupt stored data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Log the failure and fall back to an empty value (public pages)
    Lenient,
    /// Propagate the failure so it is visible (admin edit screens)
    Strict,
}

impl DecodePolicy {
    pub fn apply<T: Default>(self, decoded: CodecResult<T>) -> CodecResult<T> {
        match (self, decoded) {
            (_, Ok(value)) => Ok(value),
            (DecodePolicy::Strict, Err(e)) => Err(e),
            (DecodePolicy::Lenient, Err(e)) => {
                tracing::warn!(field = e.field, "Falling back to empty value: {}", e);
                Ok(T::default())
            }
        }
    }
}

pub fn encode_list(field: &'static str, items: &[String]) -> CodecResult<String> {
    encode(field, items)
}

pub fn decode_list(field: &'static str, text: &str) -> CodecResult<Vec<String>> {
    decode(field, text)
}

pub fn encode_map(field: &'static str, map: &BTreeMap<String, String>) -> CodecResult<String> {
    encode(field, map)
}

pub fn decode_map(field: &'static str, text: &str) -> CodecResult<BTreeMap<String, String>> {
    decode(field, text)
}

pub fn encode_records<T: Serialize>(field: &'static str, records: &[T]) -> CodecResult<String> {
    encode(field, records)
}

pub fn decode_records<T: DeserializeOwned>(field: &'static str, text: &str) -> CodecResult<Vec<T>> {
    decode(field, text)
}

fn encode<T: Serialize + ?Sized>(field: &'static str, value: &T) -> CodecResult<String> {
    serde_json::to_string(value).map_err(|source| CodecError { field, source })
}

fn decode<T: DeserializeOwned>(field: &'static str, text: &str) -> CodecResult<T> {
    serde_json::from_str(text).map_err(|source| CodecError { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Member {
        name: String,
        role: String,
    }

    #[test]
    fn test_list_keeps_stored_shape() {
        let features = vec!["Task Management".to_string(), "Cloud Sync".to_string()];
        let text = encode_list("features", &features).unwrap();
        assert_eq!(text, r#"["Task Management","Cloud Sync"]"#);
        assert_eq!(decode_list("features", "[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_map_reads_rows_written_by_other_clients() {
        let stored = r#"{"twitter":"","linkedin":"https://linkedin.com/x","github":""}"#;
        let links = decode_map("socialLinks", stored).unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links["linkedin"], "https://linkedin.com/x");
    }

    #[test]
    fn test_decode_error_names_field() {
        let err = decode_list("screenshots", "not json").unwrap_err();
        assert_eq!(err.field, "screenshots");
        assert!(err.to_string().contains("screenshots"));
    }

    #[test]
    fn test_wrong_shape_is_a_decode_error() {
        // a map where a list is expected
        assert!(decode_list("features", r#"{"a":"b"}"#).is_err());
        assert!(decode_map("stats", r#"["a"]"#).is_err());
    }

    #[test]
    fn test_records_decode() {
        let stored = r#"[{"name":"Jane Smith","role":"UI/UX Designer"}]"#;
        let members: Vec<Member> = decode_records("teamMembers", stored).unwrap();
        assert_eq!(
            members,
            vec![Member {
                name: "Jane Smith".to_string(),
                role: "UI/UX Designer".to_string()
            }]
        );
    }

    #[test]
    fn test_lenient_policy_falls_back_to_empty() {
        let corrupt = decode_list("features", "{oops");
        assert_eq!(DecodePolicy::Lenient.apply(corrupt).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_strict_policy_propagates() {
        let corrupt = decode_map("socialLinks", "");
        let err = DecodePolicy::Strict.apply(corrupt).unwrap_err();
        assert_eq!(err.field, "socialLinks");
    }

    proptest! {
        #[test]
        fn prop_list_roundtrip(items in proptest::collection::vec(any::<String>(), 0..16)) {
            let text = encode_list("features", &items).unwrap();
            prop_assert_eq!(decode_list("features", &text).unwrap(), items);
        }

        #[test]
        fn prop_map_roundtrip(map in proptest::collection::btree_map(any::<String>(), any::<String>(), 0..16)) {
            let text = encode_map("socialLinks", &map).unwrap();
            prop_assert_eq!(decode_map("socialLinks", &text).unwrap(), map);
        }
    }
}
