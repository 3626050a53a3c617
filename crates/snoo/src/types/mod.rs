//! Domain types for the Reddit API.
//!
//! This module contains the things returned by listing endpoints and the
//! options and results of post submission.

mod comment;
mod kind;
mod link;
mod listing;
mod submit;
mod subreddit;

pub use comment::Comment;
pub use kind::Kind;
pub use link::Link;
pub use listing::CommentsLinksSubreddits;
pub(crate) use listing::partition;
pub use submit::{SubmitSelfOptions, SubmitUrlOptions, Submitted};
pub use subreddit::Subreddit;
