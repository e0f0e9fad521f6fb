use std::fmt;

use chrono::{TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::{Time, User};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

impl CommentId {
    pub fn from_time(t: Time) -> CommentId {
        CommentId(u64::try_from(t.timestamp_millis()).unwrap_or(0))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,

    #[serde(
        serialize_with = "chrono::serde::ts_milliseconds::serialize",
        deserialize_with = "deserialize_millis"
    )]
    pub created_at: Time,

    pub score: u32,
    pub user: User,

    /// Replies, only ever present on top-level comments
    #[serde(default)]
    pub replies: Vec<Comment>,

    /// Username this comment answers to, only ever present on replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replying_to: Option<String>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.replying_to.is_some()
    }

    pub fn find_in<'a>(comments: &'a [Comment], id: CommentId) -> Option<&'a Comment> {
        for c in comments {
            if c.id == id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(&c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    pub fn find_in_mut<'a>(comments: &'a mut [Comment], id: CommentId) -> Option<&'a mut Comment> {
        for c in comments.iter_mut() {
            if c.id == id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in_mut(&mut c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Iterate over this comment and all its replies
    pub fn iter_all(&self) -> impl Iterator<Item = &Comment> {
        std::iter::once(self).chain(self.replies.iter())
    }
}

/// Unix milliseconds, also accepting fractional values as some writers produce them
fn deserialize_millis<'de, D: Deserializer<'de>>(d: D) -> Result<Time, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
    }

    let millis = match Millis::deserialize(d)? {
        Millis::Int(m) => m,
        Millis::Float(m) if m.is_finite() => m.floor() as i64,
        Millis::Float(m) => {
            return Err(de::Error::custom(format!("invalid timestamp {m}")));
        }
    };
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| de::Error::custom(format!("timestamp {millis} is out of range")))
}
