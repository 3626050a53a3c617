//! Command-line front end for the snoo Reddit client.
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::time::Duration;

use clap::{Parser, Subcommand};
use snoo::{Kind, RedditClient, SubmitSelfOptions, SubmitUrlOptions};
use tracing::{debug, info, warn};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Fetch and manage Reddit posts.
#[derive(Parser, Debug)]
#[command(name = "snoo")]
#[command(version, about, long_about = None)]
struct Args {
    /// API base URL
    #[arg(long, default_value = "https://oauth.reddit.com/")]
    base_url: String,

    /// OAuth access token
    #[arg(long, env = "SNOO_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// User agent sent with every request
    #[arg(long, env = "SNOO_USER_AGENT")]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch comments, links and subreddits by fullname
    Info {
        /// Fullnames such as t3_15bfi0
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Submit a self post
    SubmitSelf {
        #[command(flatten)]
        post: PostArgs,

        /// Markdown body
        #[arg(long, default_value = "")]
        text: String,
    },

    /// Submit a link post
    SubmitUrl {
        #[command(flatten)]
        post: PostArgs,

        /// URL to link to
        #[arg(long)]
        url: String,

        /// Submit even if the URL was posted before
        #[arg(long)]
        resubmit: bool,
    },

    /// Turn inbox replies on or off for a thing
    Replies {
        id: String,

        /// Disable instead of enable
        #[arg(long)]
        off: bool,
    },

    /// Mark a post NSFW
    Nsfw {
        id: String,

        /// Remove the mark instead
        #[arg(long)]
        undo: bool,
    },

    /// Mark a post as a spoiler
    Spoiler {
        id: String,

        /// Remove the mark instead
        #[arg(long)]
        undo: bool,
    },

    /// Hide links
    Hide {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Unhide links
    Unhide {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Fields shared by both submission kinds.
#[derive(clap::Args, Debug)]
struct PostArgs {
    /// Target subreddit, with or without the r/ prefix
    #[arg(long)]
    subreddit: String,

    /// Post title
    #[arg(long)]
    title: String,

    /// Flair template id
    #[arg(long)]
    flair_id: Option<String>,

    /// Flair text
    #[arg(long)]
    flair_text: Option<String>,

    /// Do not send inbox replies
    #[arg(long)]
    no_replies: bool,

    /// Mark the post NSFW
    #[arg(long)]
    nsfw: bool,

    /// Mark the post as a spoiler
    #[arg(long)]
    spoiler: bool,
}

impl PostArgs {
    fn subreddit(&self) -> &str {
        self.subreddit
            .strip_prefix("r/")
            .unwrap_or(&self.subreddit)
    }
}

impl From<PostArgs> for SubmitSelfOptions {
    fn from(args: PostArgs) -> Self {
        let mut options = SubmitSelfOptions::new(args.subreddit(), &args.title)
            .nsfw(args.nsfw)
            .spoiler(args.spoiler);
        options.flair_id = args.flair_id;
        options.flair_text = args.flair_text;
        if args.no_replies {
            options.send_replies = Some(false);
        }
        options
    }
}

impl From<PostArgs> for SubmitUrlOptions {
    fn from(args: PostArgs) -> Self {
        let mut options = SubmitUrlOptions::new(args.subreddit(), &args.title)
            .nsfw(args.nsfw)
            .spoiler(args.spoiler);
        options.flair_id = args.flair_id;
        options.flair_text = args.flair_text;
        if args.no_replies {
            options.send_replies = Some(false);
        }
        options
    }
}

// ============================================================================
// Commands
// ============================================================================

fn check_fullnames(ids: &[String]) {
    for id in ids {
        if Kind::from_fullname(id).is_none() {
            warn!(id = %id, "not a fullname, Reddit will likely ignore it");
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &RedditClient, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Info { ids } => {
            check_fullnames(&ids);
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let things = client.listings().get(&ids).await?;
            info!(
                comments = things.comments.len(),
                links = things.links.len(),
                subreddits = things.subreddits.len(),
                "fetched things"
            );
            print_json(&things)?;
        }
        Command::SubmitSelf { post, text } => {
            let options = SubmitSelfOptions::from(post).text(text);
            info!(subreddit = %options.subreddit, title = %options.title, "submitting self post");
            let submitted = client.posts().submit_self(&options).await?;
            print_json(&submitted)?;
        }
        Command::SubmitUrl {
            post,
            url,
            resubmit,
        } => {
            let options = SubmitUrlOptions::from(post).url(url).resubmit(resubmit);
            info!(subreddit = %options.subreddit, url = %options.url, "submitting link post");
            let submitted = client.posts().submit_url(&options).await?;
            print_json(&submitted)?;
        }
        Command::Replies { id, off } => {
            if off {
                client.posts().disable_replies(&id).await?;
            } else {
                client.posts().enable_replies(&id).await?;
            }
            info!(id = %id, enabled = !off, "updated inbox replies");
        }
        Command::Nsfw { id, undo } => {
            if undo {
                client.posts().unmark_nsfw(&id).await?;
            } else {
                client.posts().mark_nsfw(&id).await?;
            }
            info!(id = %id, nsfw = !undo, "updated NSFW mark");
        }
        Command::Spoiler { id, undo } => {
            if undo {
                client.posts().unspoiler(&id).await?;
            } else {
                client.posts().spoiler(&id).await?;
            }
            info!(id = %id, spoiler = !undo, "updated spoiler mark");
        }
        Command::Hide { ids } => {
            check_fullnames(&ids);
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            client.posts().hide(&ids).await?;
            info!(count = ids.len(), "hid links");
        }
        Command::Unhide { ids } => {
            check_fullnames(&ids);
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            client.posts().unhide(&ids).await?;
            info!(count = ids.len(), "unhid links");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = RedditClient::builder()
        .url(&args.base_url)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(token) = args.token {
        builder = builder.access_token(token);
    } else {
        warn!("no access token configured, authenticated endpoints will fail");
    }
    if let Some(user_agent) = args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let client = builder.build()?;
    debug!(client = ?client, "client ready");

    run(&client, args.command).await
}
