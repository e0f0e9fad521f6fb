use crate::{truncate_millis, Comment, CommentId, Thread, Time, User};

/// Position of a comment in the thread
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Depth {
    TopLevel,
    Reply,
}

/// Document the thread gets bootstrapped from when nothing is stored yet
///
/// Seed comments carry no usable creation date; one gets assigned when turning the
/// document into a [`Thread`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument {
    pub current_user: User,
    pub comments: Vec<SeedComment>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedComment {
    pub id: CommentId,
    pub content: String,
    pub score: u32,
    pub user: User,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<SeedComment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replying_to: Option<String>,
}

impl SeedDocument {
    /// Build the thread, calling `date_for` once per comment to pick its creation date
    ///
    /// Replies nested deeper than one level get flattened under their top-level ancestor.
    /// Replies that do not say whom they answer are taken to answer the comment they hang
    /// under.
    pub fn into_thread(self, mut date_for: impl FnMut(Depth) -> Time) -> Thread {
        let comments = self
            .comments
            .into_iter()
            .map(|c| {
                let created_at = truncate_millis(date_for(Depth::TopLevel));
                let mut replies = Vec::new();
                flatten_replies(c.replies, &c.user.username, &mut replies, &mut date_for);
                Comment {
                    id: c.id,
                    content: c.content,
                    created_at,
                    score: c.score,
                    user: c.user,
                    replies,
                    replying_to: None,
                }
            })
            .collect();
        Thread {
            current_user: self.current_user,
            comments,
        }
    }
}

fn flatten_replies(
    seeds: Vec<SeedComment>,
    parent_author: &str,
    into: &mut Vec<Comment>,
    date_for: &mut impl FnMut(Depth) -> Time,
) {
    for s in seeds {
        let created_at = truncate_millis(date_for(Depth::Reply));
        let replying_to = s
            .replying_to
            .unwrap_or_else(|| String::from(parent_author));
        let author = s.user.username.clone();
        into.push(Comment {
            id: s.id,
            content: s.content,
            created_at,
            score: s.score,
            user: s.user,
            replies: Vec::new(),
            replying_to: Some(replying_to),
        });
        flatten_replies(s.replies, &author, into, date_for);
    }
}
