//! Comment (`t1`) types.

use serde::{Deserialize, Serialize};

/// A comment on a link.
///
/// Every field tolerates being absent or `null` in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// The base-36 id, without kind prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub id: String,
    /// The fullname, e.g. `t1_c0b2`.
    #[serde(rename = "name", deserialize_with = "crate::de::null_default")]
    pub full_id: String,
    /// Creation time as seconds since the Unix epoch (UTC).
    #[serde(deserialize_with = "crate::de::null_default")]
    pub created_utc: f64,
    /// Path of the comment relative to reddit.com.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub permalink: String,

    /// Markdown body.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub body: String,
    /// Username of the author.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub author: String,
    /// Fullname of the author. Absent for deleted accounts.
    pub author_fullname: Option<String>,

    /// Fullname of the parent comment or link.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub parent_id: String,
    /// Fullname of the link this comment belongs to.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub link_id: String,
    /// Title of the link this comment belongs to.
    pub link_title: Option<String>,

    /// Subreddit name without prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit: String,
    /// Subreddit name with `r/` prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_name_prefixed: String,
    /// Fullname of the subreddit.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_id: String,

    /// Net score.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub score: i64,
    /// `Some(true)` upvoted, `Some(false)` downvoted, `None` no vote.
    pub likes: Option<bool>,
    /// Whether the author of the link wrote this comment.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub is_submitter: bool,

    /// Whether the authenticated user saved it.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub saved: bool,
    /// Whether it is pinned by a moderator.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub stickied: bool,
    /// Whether replies are disabled.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub locked: bool,
    /// Whether it is too old to vote on or reply to.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub archived: bool,
    /// Whether inbox replies are sent to the author.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub send_replies: bool,
}
