//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of Tatsu API paths.
//!
//! | Module | API paths | Description |
//! |--------|-----------|-------------|
//! | `users` | `users/{id}/profile` | User profile lookup |
//! | `guilds` | `guilds/{id}/rankings/...` | Guild leaderboard lookups |

use serde_json::Value;

pub mod guilds;
pub mod users;

pub use guilds::GuildsApi;
pub use users::UsersApi;

// Field extraction with an explicit default on a missing (or mistyped) key.
// Response records are built only from these copies, never computed.

pub(crate) fn opt_string(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn opt_u64(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(Value::as_u64)
}

pub(crate) fn opt_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_default_to_none() {
        let value = json!({"present": "yes"});

        assert_eq!(opt_string(&value, "present"), Some("yes".to_string()));
        assert_eq!(opt_string(&value, "absent"), None);
        assert_eq!(opt_u64(&value, "absent"), None);
        assert_eq!(opt_i64(&value, "absent"), None);
    }

    #[test]
    fn test_mistyped_keys_default_to_none() {
        let value = json!({"id": "not-a-number", "name": 42});

        assert_eq!(opt_u64(&value, "id"), None);
        assert_eq!(opt_string(&value, "name"), None);
    }
}
