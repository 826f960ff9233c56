//! Request DTOs for the cache host API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Request body for the insert operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, value: &str) -> SetRequest {
        SetRequest {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
    }

    #[test]
    fn test_validate_empty_key() {
        assert!(request("", "test").validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(request(&key, "test").validate().is_some());
    }

    #[test]
    fn test_validate_value_too_large() {
        let value = "x".repeat(MAX_VALUE_SIZE + 1);
        assert!(request("key", &value).validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request("valid_key", "test").validate().is_none());
    }
}
