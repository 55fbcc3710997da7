use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pattern ready to be stored: constructed at submit time, discarded once
/// the request resolves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewPattern {
    pub owner: String,
    pub name: String,
    /// Space-separated row encoding, e.g. "010 001 111".
    pub body: String,
}

/// A pattern as the server returns it from the per-user listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedPattern {
    pub owner: String,
    pub name: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Error payload the server attaches to rejections: `{ "msg": "..." }`.
/// The msg is shown to the user verbatim.
#[derive(Deserialize, Debug)]
pub struct RejectionBody {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pattern_serializes_flat() {
        let pattern = NewPattern {
            owner: "alice".to_string(),
            name: "glider".to_string(),
            body: "010 001 111".to_string(),
        };
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "owner": "alice",
                "name": "glider",
                "body": "010 001 111",
            })
        );
    }

    #[test]
    fn test_saved_pattern_parses_without_timestamp() {
        let json = r#"{"owner":"alice","name":"glider","body":"010 001 111"}"#;
        let saved: SavedPattern = serde_json::from_str(json).unwrap();
        assert_eq!(saved.name, "glider");
        assert!(saved.created_at.is_none());
    }

    #[test]
    fn test_rejection_body_parses_msg() {
        let body: RejectionBody = serde_json::from_str(r#"{"msg":"duplicate name"}"#).unwrap();
        assert_eq!(body.msg, "duplicate name");
    }
}
