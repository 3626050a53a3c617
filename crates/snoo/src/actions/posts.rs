//! Post submission and management operations.
//!
//! # Example
//!
//! ```no_run
//! use snoo::{RedditClient, SubmitSelfOptions};
//!
//! # async fn example() -> snoo::Result<()> {
//! let client = RedditClient::builder().access_token("token").build()?;
//!
//! let options = SubmitSelfOptions::new("test", "Hello").text("First post");
//! let post = client.posts().submit_self(&options).await?;
//!
//! client.posts().disable_replies(&post.full_id).await?;
//! client.posts().hide(&[post.full_id.as_str()]).await?;
//! # Ok(())
//! # }
//! ```

use tracing::warn;

use crate::client::RedditClient;
use crate::error::{Error, Result};
use crate::request::{IdForm, SendRepliesForm, SubmitForm, SubmitRoot};
use crate::types::{SubmitSelfOptions, SubmitUrlOptions, Submitted};

/// Provides access to post operations.
///
/// Obtained via [`RedditClient::posts()`].
#[derive(Debug)]
pub struct PostActions<'a> {
    pub(crate) client: &'a RedditClient,
}

impl<'a> PostActions<'a> {
    /// Submit a self (text) post.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reddit`] if Reddit rejects the submission, e.g.
    /// because the subreddit does not exist.
    pub async fn submit_self(&self, options: &SubmitSelfOptions) -> Result<Submitted> {
        self.submit(SubmitForm::new(options, "self")).await
    }

    /// Submit a link post.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reddit`] if Reddit rejects the submission, e.g.
    /// because the link was already submitted and `resubmit` is not set.
    pub async fn submit_url(&self, options: &SubmitUrlOptions) -> Result<Submitted> {
        self.submit(SubmitForm::new(options, "link")).await
    }

    async fn submit<O>(&self, form: SubmitForm<'_, O>) -> Result<Submitted>
    where
        O: serde::Serialize,
    {
        let root: SubmitRoot = self.client.post_form("api/submit", &form).await?;

        let errors = root.json.api_errors();
        if !errors.is_empty() {
            warn!(count = errors.len(), "submission rejected");
            return Err(Error::Reddit(errors));
        }

        root.json.data.ok_or(Error::EmptyResponse)
    }

    /// Enable inbox replies for a thing created by the authenticated user.
    pub async fn enable_replies(&self, id: &str) -> Result<()> {
        self.send_replies(id, true).await
    }

    /// Disable inbox replies for a thing created by the authenticated user.
    pub async fn disable_replies(&self, id: &str) -> Result<()> {
        self.send_replies(id, false).await
    }

    async fn send_replies(&self, id: &str, state: bool) -> Result<()> {
        self.client
            .post_form_void("api/sendreplies", &SendRepliesForm { id, state })
            .await
    }

    /// Mark a post NSFW.
    pub async fn mark_nsfw(&self, id: &str) -> Result<()> {
        self.client
            .post_form_void("api/marknsfw", &IdForm { id })
            .await
    }

    /// Remove the NSFW mark from a post.
    pub async fn unmark_nsfw(&self, id: &str) -> Result<()> {
        self.client
            .post_form_void("api/unmarknsfw", &IdForm { id })
            .await
    }

    /// Mark a post as a spoiler.
    pub async fn spoiler(&self, id: &str) -> Result<()> {
        self.client.post_form_void("api/spoiler", &IdForm { id }).await
    }

    /// Remove the spoiler mark from a post.
    pub async fn unspoiler(&self, id: &str) -> Result<()> {
        self.client
            .post_form_void("api/unspoiler", &IdForm { id })
            .await
    }

    /// Hide links from the authenticated user's listings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without making a request if `ids`
    /// is empty.
    pub async fn hide(&self, ids: &[&str]) -> Result<()> {
        self.hide_or_unhide("api/hide", ids).await
    }

    /// Undo [`hide`](Self::hide).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without making a request if `ids`
    /// is empty.
    pub async fn unhide(&self, ids: &[&str]) -> Result<()> {
        self.hide_or_unhide("api/unhide", ids).await
    }

    async fn hide_or_unhide(&self, path: &str, ids: &[&str]) -> Result<()> {
        if ids.is_empty() {
            return Err(Error::InvalidArgument(
                "must provide at least 1 id".to_string(),
            ));
        }

        let id = ids.join(",");
        self.client.post_form_void(path, &IdForm { id: &id }).await
    }
}
