//! Subreddit (`t5`) types.

use serde::{Deserialize, Serialize};

/// A community on Reddit.
///
/// Every field tolerates being absent or `null` in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subreddit {
    /// The base-36 id, without kind prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub id: String,
    /// The fullname, e.g. `t5_2qh1i`.
    #[serde(rename = "name", deserialize_with = "crate::de::null_default")]
    pub full_id: String,
    /// Creation time as seconds since the Unix epoch (UTC).
    #[serde(deserialize_with = "crate::de::null_default")]
    pub created_utc: f64,
    /// Path such as `/r/rust/`.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub url: String,

    /// Name without prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub display_name: String,
    /// Name with `r/` prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub display_name_prefixed: String,
    /// Title shown in the browser tab.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub title: String,
    /// Short description.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub public_description: String,
    /// Sidebar markdown.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub description: String,
    /// `public`, `private`, `restricted`, ...
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_type: String,

    /// Number of subscribers.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subscribers: i64,
    /// Users currently online, when Reddit reports it.
    pub active_user_count: Option<i64>,
    /// Whether the subreddit is NSFW.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub over18: bool,

    /// Whether the authenticated user is subscribed.
    pub user_is_subscriber: Option<bool>,
    /// Whether the authenticated user moderates it.
    pub user_is_moderator: Option<bool>,
}
