//! Post submission options and results.

use serde::{Deserialize, Serialize};

/// A newly submitted post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submitted {
    /// The base-36 id, without kind prefix.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub id: String,
    /// The fullname, e.g. `t3_15bfi0`.
    #[serde(rename = "name", deserialize_with = "crate::de::null_default")]
    pub full_id: String,
    /// Full URL of the new post.
    #[serde(deserialize_with = "crate::de::null_default")]
    pub url: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Options for a self (text) post.
///
/// Empty strings, unset options and `false` flags are left out of the
/// request. `send_replies` is sent whenever it is set, so replies can be
/// turned off explicitly.
///
/// # Example
///
/// ```
/// use snoo::SubmitSelfOptions;
///
/// let options = SubmitSelfOptions::new("test", "Hello")
///     .text("First post")
///     .flair_text("Discussion")
///     .spoiler(true);
///
/// assert_eq!(options.subreddit, "test");
/// assert!(options.spoiler);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmitSelfOptions {
    /// Target subreddit, without `r/` prefix.
    #[serde(rename = "sr", skip_serializing_if = "String::is_empty")]
    pub subreddit: String,
    /// Post title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Markdown body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Id of a flair template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_id: Option<String>,
    /// Flair text, for editable flair templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_text: Option<String>,

    /// Whether inbox replies are sent. Reddit defaults to `true`.
    #[serde(rename = "sendreplies", skip_serializing_if = "Option::is_none")]
    pub send_replies: Option<bool>,
    /// Mark the post NSFW.
    #[serde(skip_serializing_if = "is_false")]
    pub nsfw: bool,
    /// Mark the post as a spoiler.
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl SubmitSelfOptions {
    /// Create options for a post in `subreddit` titled `title`.
    pub fn new(subreddit: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            subreddit: subreddit.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the markdown body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the flair template id.
    pub fn flair_id(mut self, id: impl Into<String>) -> Self {
        self.flair_id = Some(id.into());
        self
    }

    /// Set the flair text.
    pub fn flair_text(mut self, text: impl Into<String>) -> Self {
        self.flair_text = Some(text.into());
        self
    }

    /// Explicitly enable or disable inbox replies.
    pub fn send_replies(mut self, enabled: bool) -> Self {
        self.send_replies = Some(enabled);
        self
    }

    /// Mark the post NSFW.
    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Mark the post as a spoiler.
    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }
}

/// Options for a link post.
///
/// Encoded the same way as [`SubmitSelfOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmitUrlOptions {
    /// Target subreddit, without `r/` prefix.
    #[serde(rename = "sr", skip_serializing_if = "String::is_empty")]
    pub subreddit: String,
    /// Post title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// The URL to link to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Id of a flair template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_id: Option<String>,
    /// Flair text, for editable flair templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_text: Option<String>,

    /// Whether inbox replies are sent. Reddit defaults to `true`.
    #[serde(rename = "sendreplies", skip_serializing_if = "Option::is_none")]
    pub send_replies: Option<bool>,
    /// Submit even if the URL was already posted to the subreddit.
    #[serde(skip_serializing_if = "is_false")]
    pub resubmit: bool,
    /// Mark the post NSFW.
    #[serde(skip_serializing_if = "is_false")]
    pub nsfw: bool,
    /// Mark the post as a spoiler.
    #[serde(skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl SubmitUrlOptions {
    /// Create options for a link in `subreddit` titled `title`.
    pub fn new(subreddit: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            subreddit: subreddit.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the URL to link to.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the flair template id.
    pub fn flair_id(mut self, id: impl Into<String>) -> Self {
        self.flair_id = Some(id.into());
        self
    }

    /// Set the flair text.
    pub fn flair_text(mut self, text: impl Into<String>) -> Self {
        self.flair_text = Some(text.into());
        self
    }

    /// Explicitly enable or disable inbox replies.
    pub fn send_replies(mut self, enabled: bool) -> Self {
        self.send_replies = Some(enabled);
        self
    }

    /// Allow posting a URL that was already submitted.
    pub fn resubmit(mut self, resubmit: bool) -> Self {
        self.resubmit = resubmit;
        self
    }

    /// Mark the post NSFW.
    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Mark the post as a spoiler.
    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }
}
