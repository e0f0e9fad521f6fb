use crate::{
    api::{CommentId, Error, ReplyTarget, Thread, Time},
    render, KvStore, Persistence, ThreadView,
};

/// Which form, if any, is currently open in the thread
///
/// At most one edit or reply form is open at any time: opening one closes the other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Idle,
    Editing(CommentId),
    Replying {
        /// Comment whose reply button was clicked
        clicked: CommentId,
        target: ReplyTarget,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppState {
    pub thread: Thread,
    pub mode: Mode,

    /// Comment the delete confirmation modal is currently asking about
    pub pending_delete: Option<CommentId>,
}

impl AppState {
    pub fn new(thread: Thread) -> AppState {
        AppState {
            thread,
            mode: Mode::Idle,
            pending_delete: None,
        }
    }

    fn is_own(&self, id: CommentId) -> Option<bool> {
        self.thread
            .find_by_id(id)
            .map(|c| c.user.is(&self.thread.current_user))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Upvote(CommentId),
    Downvote(CommentId),

    StartReply(CommentId),
    StartEdit(CommentId),
    CancelForm,

    SubmitComment(String),
    SubmitReply(String),
    SubmitEdit(String),

    RequestDelete(CommentId),
    ConfirmDelete,
    CancelDelete,
}

/// Applies user actions to the thread, saving it after every mutation
pub struct Controller<S> {
    state: AppState,
    persistence: Persistence<S>,
}

impl<S: KvStore> Controller<S> {
    pub fn new(thread: Thread, persistence: Persistence<S>) -> Controller<S> {
        Controller {
            state: AppState::new(thread),
            persistence,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn render(&self, now: Time) -> ThreadView {
        render(&self.state, now)
    }

    fn commit(&mut self) {
        self.persistence.save(&self.state.thread);
        self.state.mode = Mode::Idle;
    }

    /// Apply `action`, returning whether the thread needs to be redrawn
    ///
    /// Actions referring to comments that no longer exist and submissions of blank content
    /// are ignored.
    pub fn dispatch(&mut self, action: Action, now: Time) -> bool {
        tracing::debug!(?action, "dispatching user action");
        let res = match action {
            Action::Upvote(id) => self.vote(id, 1),
            Action::Downvote(id) => self.vote(id, -1),
            Action::StartReply(id) => self.start_reply(id),
            Action::StartEdit(id) => self.start_edit(id),
            Action::CancelForm => Ok(std::mem::replace(&mut self.state.mode, Mode::Idle) != Mode::Idle),
            Action::SubmitComment(text) => self.submit_comment(&text, now),
            Action::SubmitReply(text) => self.submit_reply(&text, now),
            Action::SubmitEdit(text) => self.submit_edit(&text),
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ConfirmDelete => self.confirm_delete(),
            Action::CancelDelete => Ok(self.state.pending_delete.take().is_some()),
        };
        match res {
            Ok(redraw) => redraw,
            Err(Error::EmptyContent) => {
                tracing::debug!("ignoring submission of empty content");
                false
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(%err, "ignoring action on missing comment");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "user action failed");
                false
            }
        }
    }

    fn vote(&mut self, id: CommentId, delta: i64) -> Result<bool, Error> {
        let score = self.state.thread.adjust_score(id, delta)?;
        tracing::trace!(%id, score, "comment score changed");
        self.persistence.save(&self.state.thread);
        Ok(true)
    }

    fn start_reply(&mut self, id: CommentId) -> Result<bool, Error> {
        let target = self.state.thread.resolve_reply_target(id)?;
        self.state.mode = Mode::Replying {
            clicked: id,
            target,
        };
        Ok(true)
    }

    fn start_edit(&mut self, id: CommentId) -> Result<bool, Error> {
        match self.state.is_own(id) {
            None => Err(Error::NotFound(id)),
            Some(false) => {
                tracing::warn!(%id, "refusing to edit a comment from another user");
                Ok(false)
            }
            Some(true) => {
                self.state.mode = Mode::Editing(id);
                Ok(true)
            }
        }
    }

    fn submit_comment(&mut self, text: &str, now: Time) -> Result<bool, Error> {
        let author = self.state.thread.current_user.clone();
        self.state.thread.add_comment(text, author, now)?;
        self.commit();
        Ok(true)
    }

    fn submit_reply(&mut self, text: &str, now: Time) -> Result<bool, Error> {
        let target = match &self.state.mode {
            Mode::Replying { target, .. } => target.clone(),
            _ => {
                tracing::warn!("got a reply submission without an open reply form");
                return Ok(false);
            }
        };
        let author = self.state.thread.current_user.clone();
        self.state
            .thread
            .add_reply(target.parent, text, author, target.replying_to, now)?;
        self.commit();
        Ok(true)
    }

    fn submit_edit(&mut self, text: &str) -> Result<bool, Error> {
        let id = match self.state.mode {
            Mode::Editing(id) => id,
            _ => {
                tracing::warn!("got an edit submission without an open edit form");
                return Ok(false);
            }
        };
        match self.state.thread.set_content(id, text)? {
            true => self.commit(),
            false => self.state.mode = Mode::Idle,
        }
        Ok(true)
    }

    fn request_delete(&mut self, id: CommentId) -> Result<bool, Error> {
        match self.state.is_own(id) {
            None => Err(Error::NotFound(id)),
            Some(false) => {
                tracing::warn!(%id, "refusing to delete a comment from another user");
                Ok(false)
            }
            Some(true) => {
                self.state.pending_delete = Some(id);
                Ok(true)
            }
        }
    }

    fn confirm_delete(&mut self) -> Result<bool, Error> {
        let id = match self.state.pending_delete.take() {
            Some(id) => id,
            None => return Ok(false),
        };
        match self.state.thread.delete(id) {
            Ok(removed) => {
                tracing::debug!(id = %removed.id, replies = removed.replies.len(), "deleted comment");
                self.commit();
            }
            // Modal still needs closing
            Err(err) => tracing::debug!(%err, "comment to delete is already gone"),
        }
        Ok(true)
    }
}
