use crate::{
    api::{Avatar, Comment, CommentId, Thread, Time},
    time_since, AppState, Mode,
};

/// Everything the thread view displays, computed from scratch on every redraw
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThreadView {
    /// Top-level comments, highest score first
    pub cards: Vec<CardView>,

    /// The always-present form for writing a new top-level comment
    pub composer: FormView,

    pub delete_modal_open: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardView {
    pub id: CommentId,
    pub score: u32,
    pub avatar: Avatar,
    pub username: String,

    /// Whether the comment was written by the current user
    pub is_own: bool,

    /// Humanized age, eg. "3 days ago"
    pub age: String,

    pub actions: Actions,
    pub body: Body,
    pub replies: Vec<CardView>,

    /// Reply form, shown right after this card and its replies
    pub reply_form: Option<FormView>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Actions {
    /// Delete and edit buttons
    Owner,
    /// Reply button
    Reply,
    /// No buttons, while the card is being edited
    Hidden,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Body {
    Content {
        replying_to: Option<String>,
        text: String,
    },
    Editing {
        draft: String,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormKind {
    NewComment,
    Reply { replying_to: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormView {
    pub kind: FormKind,
    pub avatar: Avatar,
}

impl FormView {
    pub fn placeholder(&self) -> &'static str {
        match self.kind {
            FormKind::NewComment => "Add a comment...",
            FormKind::Reply { .. } => "Add a reply...",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.kind {
            FormKind::NewComment => "Send",
            FormKind::Reply { .. } => "Reply",
        }
    }
}

pub fn render(state: &AppState, now: Time) -> ThreadView {
    let thread = &state.thread;

    // sort is stable, so equal scores keep insertion order
    let mut top_level = thread.comments.iter().collect::<Vec<_>>();
    top_level.sort_by(|a, b| b.score.cmp(&a.score));

    ThreadView {
        cards: top_level
            .into_iter()
            .map(|c| card(thread, &state.mode, c, now))
            .collect(),
        composer: FormView {
            kind: FormKind::NewComment,
            avatar: thread.current_user.image.clone(),
        },
        delete_modal_open: state.pending_delete.is_some(),
    }
}

fn card(thread: &Thread, mode: &Mode, c: &Comment, now: Time) -> CardView {
    let is_own = c.user.is(&thread.current_user);
    let editing = *mode == Mode::Editing(c.id);
    let actions = match (editing, is_own) {
        (true, _) => Actions::Hidden,
        (false, true) => Actions::Owner,
        (false, false) => Actions::Reply,
    };
    let body = match editing {
        true => Body::Editing {
            draft: c.content.clone(),
        },
        false => Body::Content {
            replying_to: c.replying_to.clone(),
            text: c.content.clone(),
        },
    };
    let reply_form = match mode {
        Mode::Replying { clicked, target } if *clicked == c.id => Some(FormView {
            kind: FormKind::Reply {
                replying_to: target.replying_to.clone(),
            },
            avatar: thread.current_user.image.clone(),
        }),
        _ => None,
    };
    CardView {
        id: c.id,
        score: c.score,
        avatar: c.user.image.clone(),
        username: c.user.username.clone(),
        is_own,
        age: time_since(c.created_at, now),
        actions,
        body,
        replies: c
            .replies
            .iter()
            .map(|r| card(thread, mode, r, now))
            .collect(),
        reply_form,
    }
}
