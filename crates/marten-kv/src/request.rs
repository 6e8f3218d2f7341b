//! Request configs for the `data` entry point
//!
//! Mirrors the remote API's loosely typed config object: a required `key`,
//! an optional `act` discriminator and, for saves, an optional `val`.

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Operation discriminator for a [`DataRequest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Act {
    Load,
    Save,
    Remove,
}

impl FromStr for Act {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load" => Ok(Act::Load),
            "save" => Ok(Act::Save),
            "remove" => Ok(Act::Remove),
            other => Err(RequestError::InvalidAct(other.to_string())),
        }
    }
}

/// Request config for [`DataShim::data`](crate::DataShim::data)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataRequest {
    /// Key to operate on
    pub key: String,
    /// Requested operation; a load when absent
    #[serde(default)]
    pub act: Option<Act>,
    /// Value to store; only meaningful for a save
    #[serde(default)]
    pub val: Option<String>,
}

impl DataRequest {
    /// Load request for `key`
    pub fn load(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            act: Some(Act::Load),
            val: None,
        }
    }

    /// Save request storing `val` under `key`
    pub fn save(key: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            act: Some(Act::Save),
            val: Some(val.into()),
        }
    }

    /// Remove request for `key`
    pub fn remove(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            act: Some(Act::Remove),
            val: None,
        }
    }

    /// Parse a JSON config object of the remote API's shape.
    ///
    /// `key` must be a non-empty string; `act`, when present, must be one of
    /// `"load"`, `"save"` or `"remove"`.
    pub fn from_value(config: &JsonValue) -> Result<Self, RequestError> {
        let obj = config
            .as_object()
            .ok_or_else(|| RequestError::BadConfig("expected an object".to_string()))?;

        let key = obj
            .get("key")
            .and_then(|v| v.as_str())
            .filter(|k| !k.is_empty())
            .ok_or(RequestError::MissingKey)?;

        let act = match obj.get("act") {
            Some(v) => {
                let s = v
                    .as_str()
                    .ok_or_else(|| RequestError::BadConfig("act must be a string".to_string()))?;
                Some(s.parse::<Act>()?)
            }
            None => None,
        };

        let val = match obj.get("val") {
            None | Some(JsonValue::Null) => None,
            Some(v) => Some(
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| RequestError::BadConfig("val must be a string".to_string()))?,
            ),
        };

        Ok(Self {
            key: key.to_string(),
            act,
            val,
        })
    }

    /// Validate and normalize into the dispatch-ready form.
    pub(crate) fn validate(self) -> Result<DataOp, RequestError> {
        if self.key.is_empty() {
            return Err(RequestError::MissingKey);
        }
        Ok(match self.act.unwrap_or(Act::Load) {
            Act::Load => DataOp::Load { key: self.key },
            // A save with no val stores the empty string; a provided val is
            // kept verbatim, empty or not.
            Act::Save => DataOp::Save {
                key: self.key,
                val: self.val.unwrap_or_default(),
            },
            Act::Remove => DataOp::Remove { key: self.key },
        })
    }
}

/// Validated, dispatch-ready operation
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DataOp {
    Load { key: String },
    Save { key: String, val: String },
    Remove { key: String },
}

/// Result payload delivered to the success callback on a load
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DataResponse {
    pub key: String,
    /// `None` when the key is absent; an absent key is a successful read
    pub val: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_config() {
        let req = DataRequest::from_value(&json!({
            "key": "user:1",
            "act": "save",
            "val": "alice"
        }))
        .unwrap();

        assert_eq!(req.key, "user:1");
        assert_eq!(req.act, Some(Act::Save));
        assert_eq!(req.val.as_deref(), Some("alice"));
    }

    #[test]
    fn test_from_value_missing_or_empty_key() {
        assert_eq!(
            DataRequest::from_value(&json!({ "act": "load" })),
            Err(RequestError::MissingKey)
        );
        assert_eq!(
            DataRequest::from_value(&json!({ "key": "" })),
            Err(RequestError::MissingKey)
        );
        assert_eq!(
            DataRequest::from_value(&json!({ "key": 7 })),
            Err(RequestError::MissingKey)
        );
    }

    #[test]
    fn test_from_value_rejects_unknown_act() {
        assert_eq!(
            DataRequest::from_value(&json!({ "key": "k", "act": "delete" })),
            Err(RequestError::InvalidAct("delete".to_string()))
        );
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(matches!(
            DataRequest::from_value(&json!("key")),
            Err(RequestError::BadConfig(_))
        ));
        assert!(matches!(
            DataRequest::from_value(&json!({ "key": "k", "act": 3 })),
            Err(RequestError::BadConfig(_))
        ));
    }

    #[test]
    fn test_act_defaults_to_load() {
        let op = DataRequest::from_value(&json!({ "key": "k" }))
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(
            op,
            DataOp::Load {
                key: "k".to_string()
            }
        );
    }

    #[test]
    fn test_save_normalizes_missing_val_to_empty_string() {
        let op = DataRequest {
            key: "k".to_string(),
            act: Some(Act::Save),
            val: None,
        }
        .validate()
        .unwrap();
        assert_eq!(
            op,
            DataOp::Save {
                key: "k".to_string(),
                val: String::new()
            }
        );
    }

    #[test]
    fn test_save_keeps_explicit_empty_string() {
        let op = DataRequest::save("k", "").validate().unwrap();
        assert_eq!(
            op,
            DataOp::Save {
                key: "k".to_string(),
                val: String::new()
            }
        );
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let req: DataRequest = serde_json::from_str(r#"{"key":"a","act":"remove"}"#).unwrap();
        assert_eq!(req.key, "a");
        assert_eq!(req.act, Some(Act::Remove));
        assert_eq!(req.val, None);
    }
}
