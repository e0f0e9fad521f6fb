use crate::{truncate_millis, validate_content, Comment, CommentId, Error, Time, User};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub current_user: User,

    /// Top-level comments, in insertion order
    pub comments: Vec<Comment>,
}

/// Where a reply to some comment ends up
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyTarget {
    /// Top-level comment whose reply list receives the reply
    pub parent: CommentId,

    /// Author of the comment the user actually clicked on
    pub replying_to: String,
}

impl Thread {
    pub fn find_by_id(&self, id: CommentId) -> Option<&Comment> {
        Comment::find_in(&self.comments, id)
    }

    pub fn find_by_id_mut(&mut self, id: CommentId) -> Option<&mut Comment> {
        Comment::find_in_mut(&mut self.comments, id)
    }

    pub fn find_parent_of_reply(&self, reply_id: CommentId) -> Option<&Comment> {
        self.comments
            .iter()
            .find(|c| c.replies.iter().any(|r| r.id == reply_id))
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().flat_map(|c| c.iter_all())
    }

    pub fn len(&self) -> usize {
        self.iter_all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Mint a fresh id from the current time, bumped past every id already in use
    pub fn next_id(&self, now: Time) -> CommentId {
        let from_time = CommentId::from_time(now);
        match self.iter_all().map(|c| c.id).max() {
            Some(max) if max >= from_time => CommentId(max.0 + 1),
            _ => from_time,
        }
    }

    /// Index in `self.comments` of the top-level comment holding `id`, itself or as a reply
    fn top_level_index(&self, id: CommentId) -> Option<usize> {
        self.comments
            .iter()
            .position(|c| c.iter_all().any(|c| c.id == id))
    }

    pub fn add_comment(&mut self, content: &str, author: User, now: Time) -> Result<&Comment, Error> {
        let content = validate_content(content)?;
        let comment = Comment {
            id: self.next_id(now),
            content,
            created_at: truncate_millis(now),
            score: 0,
            user: author,
            replies: Vec::new(),
            replying_to: None,
        };
        tracing::debug!(id = %comment.id, "adding top-level comment");
        let idx = self.comments.len();
        self.comments.push(comment);
        Ok(&self.comments[idx])
    }

    /// Append a reply to `parent_id`'s reply list
    ///
    /// If `parent_id` is itself a reply, the reply lands in its top-level ancestor's list
    /// so the thread never grows deeper than one level.
    pub fn add_reply(
        &mut self,
        parent_id: CommentId,
        content: &str,
        author: User,
        replying_to: String,
        now: Time,
    ) -> Result<&Comment, Error> {
        let content = validate_content(content)?;
        let idx = self
            .top_level_index(parent_id)
            .ok_or(Error::ParentNotFound(parent_id))?;
        let reply = Comment {
            id: self.next_id(now),
            content,
            created_at: truncate_millis(now),
            score: 0,
            user: author,
            replies: Vec::new(),
            replying_to: Some(replying_to),
        };
        tracing::debug!(id = %reply.id, parent = %self.comments[idx].id, "adding reply");
        let replies = &mut self.comments[idx].replies;
        replies.push(reply);
        Ok(&replies[replies.len() - 1])
    }

    /// Change the score of `id` by `delta`, never going below zero, and return the new score
    pub fn adjust_score(&mut self, id: CommentId, delta: i64) -> Result<u32, Error> {
        let c = self.find_by_id_mut(id).ok_or(Error::NotFound(id))?;
        let score = (i64::from(c.score) + delta).clamp(0, i64::from(u32::MAX));
        c.score = u32::try_from(score).unwrap_or(0);
        Ok(c.score)
    }

    /// Replace the content of `id`, returning whether anything changed
    pub fn set_content(&mut self, id: CommentId, content: &str) -> Result<bool, Error> {
        let content = validate_content(content)?;
        let c = self.find_by_id_mut(id).ok_or(Error::NotFound(id))?;
        if c.content == content {
            return Ok(false);
        }
        c.content = content;
        Ok(true)
    }

    /// Remove `id`, along with its replies if it is a top-level comment
    pub fn delete(&mut self, id: CommentId) -> Result<Comment, Error> {
        if let Some(idx) = self.comments.iter().position(|c| c.id == id) {
            return Ok(self.comments.remove(idx));
        }
        for c in self.comments.iter_mut() {
            if let Some(idx) = c.replies.iter().position(|r| r.id == id) {
                return Ok(c.replies.remove(idx));
            }
        }
        Err(Error::NotFound(id))
    }

    /// Figure out where a reply to `clicked` should go and whom it addresses
    pub fn resolve_reply_target(&self, clicked: CommentId) -> Result<ReplyTarget, Error> {
        let c = self.find_by_id(clicked).ok_or(Error::NotFound(clicked))?;
        let idx = self
            .top_level_index(clicked)
            .ok_or(Error::NotFound(clicked))?;
        Ok(ReplyTarget {
            parent: self.comments[idx].id,
            replying_to: c.user.username.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::Avatar;

    fn user(name: &str) -> User {
        User {
            username: String::from(name),
            image: Avatar {
                png: format!("./images/avatars/image-{name}.png"),
                webp: Some(format!("./images/avatars/image-{name}.webp")),
            },
        }
    }

    fn time() -> Time {
        Utc.with_ymd_and_hms(2022, 11, 5, 10, 0, 0).unwrap()
    }

    fn comment(id: u64, score: u32, author: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            id: CommentId(id),
            content: format!("content of {id}"),
            created_at: time(),
            score,
            user: user(author),
            replies,
            replying_to: None,
        }
    }

    fn reply(id: u64, score: u32, author: &str, to: &str) -> Comment {
        Comment {
            replying_to: Some(String::from(to)),
            ..comment(id, score, author, Vec::new())
        }
    }

    fn example_thread() -> Thread {
        Thread {
            current_user: user("juliusomo"),
            comments: vec![
                comment(1, 12, "amyrobson", Vec::new()),
                comment(
                    2,
                    5,
                    "maxblagun",
                    vec![
                        reply(3, 4, "ramsesmiron", "maxblagun"),
                        reply(4, 2, "juliusomo", "ramsesmiron"),
                    ],
                ),
            ],
        }
    }

    #[test]
    fn find_by_id_reaches_both_levels() {
        let t = example_thread();
        for id in 1..=4 {
            let c = t.find_by_id(CommentId(id)).unwrap();
            assert_eq!(c.id, CommentId(id));
            let at_top = t.comments.iter().any(|c| c.id == CommentId(id));
            let in_replies = t
                .comments
                .iter()
                .flat_map(|c| c.replies.iter())
                .any(|r| r.id == CommentId(id));
            assert!(at_top ^ in_replies);
        }
        assert!(t.find_by_id(CommentId(5)).is_none());
    }

    #[test]
    fn parent_of_reply() {
        let t = example_thread();
        assert_eq!(t.find_parent_of_reply(CommentId(3)).unwrap().id, CommentId(2));
        assert_eq!(t.find_parent_of_reply(CommentId(4)).unwrap().id, CommentId(2));
        assert!(t.find_parent_of_reply(CommentId(1)).is_none());
        assert!(t.find_parent_of_reply(CommentId(2)).is_none());
    }

    #[test]
    fn new_comments_get_fresh_ids() {
        let mut t = example_thread();
        let now = time();
        let a = t.add_comment("first", user("juliusomo"), now).unwrap().id;
        let b = t.add_comment("second", user("juliusomo"), now).unwrap().id;
        assert_eq!(a, CommentId::from_time(now));
        assert_eq!(b, CommentId(a.0 + 1));
        let c = t.find_by_id(b).unwrap();
        assert_eq!(c.score, 0);
        assert_eq!(c.content, "second");
        assert!(c.replies.is_empty());
        assert_eq!(c.replying_to, None);
        assert_eq!(t.comments.len(), 4);
    }

    #[test]
    fn add_comment_rejects_blank_content() {
        let mut t = example_thread();
        assert_eq!(
            t.add_comment("   \n", user("juliusomo"), time()).unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(t, example_thread());
    }

    #[test]
    fn add_reply_to_top_level() {
        let mut t = example_thread();
        let r = t
            .add_reply(CommentId(1), " hi ", user("juliusomo"), String::from("amyrobson"), time())
            .unwrap()
            .clone();
        assert_eq!(r.content, "hi");
        assert_eq!(r.replying_to.as_deref(), Some("amyrobson"));
        assert_eq!(t.comments[0].replies, vec![r]);
    }

    #[test]
    fn add_reply_to_missing_parent() {
        let mut t = example_thread();
        assert_eq!(
            t.add_reply(CommentId(42), "hi", user("juliusomo"), String::from("x"), time())
                .unwrap_err(),
            Error::ParentNotFound(CommentId(42))
        );
        assert_eq!(t, example_thread());
    }

    #[test]
    fn reply_to_reply_flattens_to_top_level() {
        let mut t = example_thread();
        let target = t.resolve_reply_target(CommentId(3)).unwrap();
        assert_eq!(
            target,
            ReplyTarget {
                parent: CommentId(2),
                replying_to: String::from("ramsesmiron"),
            }
        );
        let id = t
            .add_reply(target.parent, "sure", user("juliusomo"), target.replying_to, time())
            .unwrap()
            .id;
        assert_eq!(t.find_parent_of_reply(id).unwrap().id, CommentId(2));
        assert_eq!(
            t.find_by_id(id).unwrap().replying_to.as_deref(),
            Some("ramsesmiron")
        );

        // Handing a reply id straight to add_reply also lands one level deep
        let id = t
            .add_reply(CommentId(4), "again", user("juliusomo"), String::from("juliusomo"), time())
            .unwrap()
            .id;
        assert_eq!(t.find_parent_of_reply(id).unwrap().id, CommentId(2));
    }

    #[test]
    fn reply_target_of_top_level() {
        let t = example_thread();
        assert_eq!(
            t.resolve_reply_target(CommentId(1)).unwrap(),
            ReplyTarget {
                parent: CommentId(1),
                replying_to: String::from("amyrobson"),
            }
        );
        assert_eq!(
            t.resolve_reply_target(CommentId(9)).unwrap_err(),
            Error::NotFound(CommentId(9))
        );
    }

    #[test]
    fn reply_target_ignores_missing_addressee() {
        let mut t = example_thread();
        t.comments[1].replies[0].replying_to = None;
        assert_eq!(
            t.resolve_reply_target(CommentId(3)).unwrap(),
            ReplyTarget {
                parent: CommentId(2),
                replying_to: String::from("ramsesmiron"),
            }
        );
    }

    #[test]
    fn score_clamps_at_zero() {
        let mut t = example_thread();
        assert_eq!(t.adjust_score(CommentId(4), 1), Ok(3));
        assert_eq!(t.adjust_score(CommentId(4), -1), Ok(2));
        assert_eq!(t.adjust_score(CommentId(4), -1), Ok(1));
        assert_eq!(t.adjust_score(CommentId(4), -1), Ok(0));
        assert_eq!(t.adjust_score(CommentId(4), -1), Ok(0));
        assert_eq!(t.adjust_score(CommentId(4), -100), Ok(0));
        assert_eq!(t.adjust_score(CommentId(8), 1), Err(Error::NotFound(CommentId(8))));
    }

    #[test]
    fn score_never_negative() {
        bolero::check!()
            .with_type::<Vec<(u8, bool)>>()
            .for_each(|votes| {
                let mut t = example_thread();
                let mut expected = t
                    .iter_all()
                    .map(|c| (c.id, i64::from(c.score)))
                    .collect::<std::collections::HashMap<_, _>>();
                for (which, up) in votes {
                    let id = CommentId(u64::from(*which % 5));
                    let delta = if *up { 1 } else { -1 };
                    match t.adjust_score(id, delta) {
                        Ok(score) => {
                            let e = expected.get_mut(&id).unwrap();
                            *e = (*e + delta).max(0);
                            assert_eq!(i64::from(score), *e);
                        }
                        Err(err) => assert_eq!(err, Error::NotFound(id)),
                    }
                }
                for c in t.iter_all() {
                    assert_eq!(i64::from(c.score), expected[&c.id]);
                }
            });
    }

    #[test]
    fn set_content() {
        let mut t = example_thread();
        assert_eq!(t.set_content(CommentId(3), "content of 3"), Ok(false));
        assert_eq!(t.set_content(CommentId(3), "  new text "), Ok(true));
        assert_eq!(t.find_by_id(CommentId(3)).unwrap().content, "new text");
        assert_eq!(t.set_content(CommentId(3), "  "), Err(Error::EmptyContent));
        assert_eq!(t.find_by_id(CommentId(3)).unwrap().content, "new text");
        assert_eq!(t.set_content(CommentId(7), "x"), Err(Error::NotFound(CommentId(7))));
    }

    #[test]
    fn delete_reply_leaves_rest_untouched() {
        let mut t = example_thread();
        let removed = t.delete(CommentId(3)).unwrap();
        assert_eq!(removed.id, CommentId(3));

        let mut expected = example_thread();
        expected.comments[1].replies.remove(0);
        assert_eq!(t, expected);

        assert_eq!(t.delete(CommentId(3)), Err(Error::NotFound(CommentId(3))));
        assert_eq!(t, expected);
    }

    #[test]
    fn delete_top_level_takes_replies_along() {
        let mut t = example_thread();
        t.delete(CommentId(2)).unwrap();
        assert_eq!(t.comments.len(), 1);
        assert_eq!(t.len(), 1);
        for id in 2..=4 {
            assert!(t.find_by_id(CommentId(id)).is_none());
        }
        assert_eq!(t.comments[0], example_thread().comments[0]);
    }

    #[test]
    fn snapshot_shape() {
        let t = example_thread();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["currentUser"]["username"], "juliusomo");
        assert_eq!(json["comments"][1]["id"], 2);
        assert_eq!(json["comments"][1]["createdAt"], time().timestamp_millis());
        assert_eq!(json["comments"][1]["replies"][0]["replyingTo"], "maxblagun");
        assert!(json["comments"][1].get("replyingTo").is_none());
        let back: Thread = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn fractional_timestamps_are_accepted() {
        let mut json = serde_json::to_value(&example_thread()).unwrap();
        json["comments"][0]["createdAt"] = serde_json::json!(1667642400123.4567);
        json["comments"][1]["replies"][0]["createdAt"] = serde_json::json!(1667642400999.9);
        let t: Thread = serde_json::from_value(json).unwrap();
        assert_eq!(t.comments[0].created_at.timestamp_millis(), 1667642400123);
        assert_eq!(t.comments[1].replies[0].created_at.timestamp_millis(), 1667642400999);
        assert_eq!(t.comments[1].created_at, time());

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["comments"][0]["createdAt"], 1667642400123i64);

        let mut json = serde_json::to_value(&example_thread()).unwrap();
        json["comments"][0]["createdAt"] = serde_json::json!("yesterday");
        assert!(serde_json::from_value::<Thread>(json).is_err());
    }
}
