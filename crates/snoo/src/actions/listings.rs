//! Listing operations.
//!
//! # Example
//!
//! ```no_run
//! use snoo::RedditClient;
//!
//! # async fn example() -> snoo::Result<()> {
//! let client = RedditClient::builder().access_token("token").build()?;
//!
//! let things = client
//!     .listings()
//!     .get(&["t3_15bfi0", "t1_c0b2", "t5_2qh1i"])
//!     .await?;
//!
//! for link in &things.links {
//!     println!("{} ({})", link.title, link.permalink);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::client::RedditClient;
use crate::error::{Error, Result};
use crate::request::ListingRoot;
use crate::types::{CommentsLinksSubreddits, partition};

/// Provides access to listing operations.
///
/// Obtained via [`RedditClient::listings()`].
#[derive(Debug)]
pub struct ListingActions<'a> {
    pub(crate) client: &'a RedditClient,
}

#[derive(Serialize)]
struct InfoQuery {
    id: String,
}

impl<'a> ListingActions<'a> {
    /// Fetch comments, links and subreddits by fullname.
    ///
    /// Things of other kinds in the response are dropped. Each bucket keeps
    /// the response order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without making a request if `ids`
    /// is empty.
    pub async fn get(&self, ids: &[&str]) -> Result<CommentsLinksSubreddits> {
        if ids.is_empty() {
            return Err(Error::InvalidArgument(
                "must provide at least 1 id".to_string(),
            ));
        }

        let query = InfoQuery { id: ids.join(",") };
        let root: ListingRoot = self.client.get("api/info", &query).await?;

        let Some(data) = root.data else {
            debug!(kind = ?root.kind, "listing has no data");
            return Ok(CommentsLinksSubreddits::default());
        };
        debug!(
            kind = ?root.kind,
            dist = ?data.dist,
            after = ?data.after,
            before = ?data.before,
            children = data.children.len(),
            "decoded listing"
        );

        partition(data.children)
    }
}
