//! An async Rust client for a subset of the Reddit API.
//!
//! This crate fetches things by fullname and submits and manages posts.
//! Every operation is a single request/response round trip with no state
//! kept between calls.
//!
//! # Quick Start
//!
//! ```no_run
//! use snoo::{RedditClient, SubmitUrlOptions};
//!
//! # async fn example() -> snoo::Result<()> {
//! let client = RedditClient::builder()
//!     .access_token("my-oauth-token")
//!     .user_agent("linux:my-bot:v0.1 (by /u/me)")
//!     .build()?;
//!
//! let options = SubmitUrlOptions::new("rust", "This Week in Rust")
//!     .url("https://this-week-in-rust.org/");
//! let post = client.posts().submit_url(&options).await?;
//! println!("Posted {}", post.url);
//!
//! let things = client.listings().get(&[post.full_id.as_str()]).await?;
//! assert_eq!(things.links.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`RedditClient::listings()`] - Fetch comments, links and subreddits by fullname
//! - [`RedditClient::posts()`] - Submit posts, toggle replies, NSFW and spoiler marks, hide and unhide
//!
//! # Authentication
//!
//! The client does not perform OAuth itself. Obtain a token elsewhere and
//! pass it to [`ClientBuilder::access_token`]; it is sent as a bearer token
//! on every request to `https://oauth.reddit.com/`.

pub mod actions;
pub mod client;
mod de;
pub mod error;
mod request;
pub mod types;

pub use client::{ClientBuilder, RedditClient};
pub use error::{ApiError, Error, Result};
pub use types::{
    Comment, CommentsLinksSubreddits, Kind, Link, SubmitSelfOptions, SubmitUrlOptions, Submitted,
    Subreddit,
};
