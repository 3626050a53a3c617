//! Heterogeneous listing results.

use serde::Serialize;
use tracing::debug;

use super::{Comment, Kind, Link, Subreddit};
use crate::error::Result;
use crate::request::RawThing;

/// Things from a listing, split by kind.
///
/// Each bucket keeps the order in which Reddit returned its things.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentsLinksSubreddits {
    /// `t1` things.
    pub comments: Vec<Comment>,
    /// `t3` things.
    pub links: Vec<Link>,
    /// `t5` things.
    pub subreddits: Vec<Subreddit>,
}

impl CommentsLinksSubreddits {
    /// Total number of things across all buckets.
    pub fn len(&self) -> usize {
        self.comments.len() + self.links.len() + self.subreddits.len()
    }

    /// Whether all buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort raw things into buckets by their `kind` tag.
///
/// Things of any other kind are dropped. A thing whose data does not match
/// its kind fails the whole partition.
pub(crate) fn partition(things: Vec<RawThing>) -> Result<CommentsLinksSubreddits> {
    let mut out = CommentsLinksSubreddits::default();

    for thing in things {
        match Kind::from_tag(&thing.kind) {
            Some(Kind::Comment) => out.comments.push(serde_json::from_value(thing.data)?),
            Some(Kind::Link) => out.links.push(serde_json::from_value(thing.data)?),
            Some(Kind::Subreddit) => out.subreddits.push(serde_json::from_value(thing.data)?),
            _ => debug!(kind = %thing.kind, "dropping thing of unsupported kind"),
        }
    }

    Ok(out)
}
