//! Link (`t3`) types.

use serde::{Deserialize, Serialize};

/// A submitted post, either a self post or a link to another page.
///
/// Every field tolerates being absent or `null` in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// The base-36 id, without kind prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub id: String,
    /// The fullname, e.g. `t3_15bfi0`.
    #[serde(rename = "name", deserialize_with = "crate::de::null_default")]
    pub full_id: String,
    /// Creation time as seconds since the Unix epoch (UTC).
    #[serde(deserialize_with = "crate::de::null_default")]
    pub created_utc: f64,
    /// Path of the post relative to reddit.com.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub permalink: String,
    /// Target URL. For self posts this points back at the post itself.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub url: String,
    /// Domain of `url`, or `self.<subreddit>` for self posts.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub domain: String,

    /// Post title.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub title: String,
    /// Markdown body of a self post. Empty for link posts.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub selftext: String,
    /// Whether this is a self post.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub is_self: bool,
    /// Thumbnail URL or a placeholder such as `self` or `default`.
    pub thumbnail: Option<String>,
    /// Flair text attached to the post.
    pub link_flair_text: Option<String>,

    /// Username of the author.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub author: String,
    /// Fullname of the author. Absent for deleted accounts.
    pub author_fullname: Option<String>,

    /// Subreddit name without prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit: String,
    /// Subreddit name with `r/` prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_name_prefixed: String,
    /// Fullname of the subreddit.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_id: String,
    /// Subscriber count of the subreddit.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub subreddit_subscribers: i64,

    /// Net score.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub score: i64,
    /// Share of upvotes among all votes.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub upvote_ratio: f64,
    /// `Some(true)` upvoted, `Some(false)` downvoted, `None` no vote.
    pub likes: Option<bool>,
    /// Number of comments.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub num_comments: i64,

    /// Whether the post is marked NSFW.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub over_18: bool,
    /// Whether the post is marked as a spoiler.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub spoiler: bool,
    /// Whether the authenticated user hid it.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub hidden: bool,
    /// Whether the authenticated user saved it.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub saved: bool,
    /// Whether it is pinned by a moderator.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub stickied: bool,
    /// Whether commenting is disabled.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub locked: bool,
    /// Whether it is too old to vote on or comment on.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub archived: bool,
    /// Whether inbox replies are sent to the author.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub send_replies: bool,
}
