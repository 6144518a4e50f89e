//! User API endpoints
//!
//! Maps to the `users/{id}/profile` path, which returns a user's global
//! profile: balances, reputation, experience and cosmetic fields.

use crate::client::TatsuClient;
use crate::endpoints::{opt_i64, opt_string, opt_u64};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Users API interface
#[derive(Clone)]
pub struct UsersApi {
    client: TatsuClient,
}

impl UsersApi {
    /// Create a new users API interface
    pub(crate) fn new(client: TatsuClient) -> Self {
        Self { client }
    }

    /// Get a user's profile
    ///
    /// GET `users/{user_id}/profile`
    ///
    /// Every field the server omits comes back as `None`; a success never
    /// yields a partially populated record beyond that.
    pub async fn profile(&self, user_id: u64) -> ApiResult<UserProfile> {
        let value = self.client.request(&format!("users/{user_id}/profile")).await?;
        Ok(map_profile(&value))
    }
}

/// Snapshot of a user profile response
///
/// All fields are optional: each one is a direct copy of the matching JSON
/// key, `None` when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Credit balance
    pub credits: Option<i64>,
    /// Four-digit discriminator
    pub discriminator: Option<String>,
    /// User id
    pub id: Option<u64>,
    /// Free-form info box text
    pub info_box: Option<String>,
    /// Reputation score
    pub reputation: Option<i64>,
    /// Equipped title
    pub title: Option<String>,
    /// Token balance
    pub tokens: Option<i64>,
    /// Username
    pub username: Option<String>,
    /// Global experience points
    pub xp: Option<i64>,
}

/// Field-by-field copy of a profile response body
fn map_profile(value: &Value) -> UserProfile {
    UserProfile {
        avatar_url: opt_string(value, "avatar_url"),
        credits: opt_i64(value, "credits"),
        discriminator: opt_string(value, "discriminator"),
        id: opt_u64(value, "id"),
        info_box: opt_string(value, "info_box"),
        reputation: opt_i64(value, "reputation"),
        title: opt_string(value, "title"),
        tokens: opt_i64(value, "tokens"),
        username: opt_string(value, "username"),
        xp: opt_i64(value, "xp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use serde_json::json;

    #[test]
    fn test_map_profile_full() {
        let value = json!({
            "avatar_url": "https://cdn.example.com/a.png",
            "credits": 1200,
            "discriminator": "0001",
            "id": 274561812664549376u64,
            "info_box": "hello",
            "reputation": 12,
            "title": "Wanderer",
            "tokens": 300,
            "username": "taka",
            "xp": 44250
        });

        let profile = map_profile(&value);
        assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(profile.credits, Some(1200));
        assert_eq!(profile.discriminator.as_deref(), Some("0001"));
        assert_eq!(profile.id, Some(274561812664549376));
        assert_eq!(profile.info_box.as_deref(), Some("hello"));
        assert_eq!(profile.reputation, Some(12));
        assert_eq!(profile.title.as_deref(), Some("Wanderer"));
        assert_eq!(profile.tokens, Some(300));
        assert_eq!(profile.username.as_deref(), Some("taka"));
        assert_eq!(profile.xp, Some(44250));
    }

    #[test]
    fn test_map_profile_empty_body() {
        let profile = map_profile(&json!({}));
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_map_profile_partial_body() {
        let profile = map_profile(&json!({"username": "taka", "xp": 10}));
        assert_eq!(profile.username.as_deref(), Some("taka"));
        assert_eq!(profile.xp, Some(10));
        assert_eq!(profile.credits, None);
        assert_eq!(profile.avatar_url, None);
    }

    #[tokio::test]
    async fn test_profile_endpoint_path_and_mapping() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/99/profile")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 99, "username": "taka", "xp": 500}"#)
            .create_async()
            .await;

        let config = ClientConfig::new("test-key").with_base_url(server.url());
        let client = TatsuClient::with_config(config).unwrap();

        let profile = client.users().profile(99).await.unwrap();
        assert_eq!(profile.id, Some(99));
        assert_eq!(profile.username.as_deref(), Some("taka"));
        assert_eq!(profile.xp, Some(500));
        assert_eq!(profile.title, None);

        mock.assert_async().await;
    }
}
