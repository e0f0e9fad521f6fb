use chrono::{DurationRound, Utc};

mod comment;
pub use comment::{Comment, CommentId};

mod error;
pub use error::Error;

mod seed;
pub use seed::{Depth, SeedComment, SeedDocument};

mod thread;
pub use thread::{ReplyTarget, Thread};

mod user;
pub use user::{Avatar, User};

pub type Time = chrono::DateTime<Utc>;

/// Timestamps are persisted with millisecond precision, so anything entering the model is
/// truncated to it to keep snapshots lossless.
pub fn truncate_millis(t: Time) -> Time {
    t.duration_trunc(chrono::Duration::milliseconds(1))
        .unwrap_or(t)
}

/// Trim user-submitted content, rejecting it if nothing is left
pub fn validate_content(raw: &str) -> Result<String, Error> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(String::from(content))
}
