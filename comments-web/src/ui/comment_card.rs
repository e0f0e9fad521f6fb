use comments_client::{api::CommentId, Action, Actions, Body, CardView};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentCardProps {
    pub card: CardView,
    pub on_action: Callback<Action>,
}

#[function_component(CommentCard)]
pub fn comment_card(p: &CommentCardProps) -> Html {
    let c = &p.card;
    let id = c.id;

    let replies = (!c.replies.is_empty()).then(|| {
        html! {
            <div class="replies-container">
                { for c.replies.iter().map(|r| html! {
                    <CommentCard key={ r.id.0 } card={ r.clone() } on_action={ p.on_action.clone() } />
                }) }
            </div>
        }
    });

    // The reply form goes after the whole wrapper, replies included
    let reply_form = c.reply_form.clone().map(|form| {
        html! {
            <div class="reply-form-wrapper">
                <ui::CommentForm
                    { form }
                    autofocus=true
                    on_submit={ p.on_action.reform(Action::SubmitReply) }
                    on_cancel={ p.on_action.reform(|_| Action::CancelForm) }
                />
            </div>
        }
    });

    html! {
        <>
            <div class="comment-wrapper">
                <div class="comment-card" data-id={ id.to_string() }>
                    <ui::ScoreCounter
                        score={ c.score }
                        on_upvote={ p.on_action.reform(move |_| Action::Upvote(id)) }
                        on_downvote={ p.on_action.reform(move |_| Action::Downvote(id)) }
                    />
                    <div class="comment-main">
                        <div class="comment-header">
                            <div class="user-info">
                                <img src={ c.avatar.png.clone() } alt={ c.username.clone() } class="user-avatar" />
                                <span class="username">{ &c.username }</span>
                                { for c.is_own.then(|| html! { <span class="you-badge">{ "you" }</span> }) }
                                <span class="comment-date">{ &c.age }</span>
                            </div>
                            { action_buttons(c.actions, id, &p.on_action) }
                        </div>
                        { body(&c.body, &p.on_action) }
                    </div>
                </div>
                { for replies }
            </div>
            { for reply_form }
        </>
    }
}

fn action_buttons(actions: Actions, id: CommentId, on_action: &Callback<Action>) -> Html {
    match actions {
        Actions::Hidden => html! {},
        Actions::Owner => html! {
            <div class="comment-actions user-actions">
                <button
                    type="button"
                    class="btn delete-btn bi-btn bi-trash-fill"
                    onclick={ on_action.reform(move |_| Action::RequestDelete(id)) }
                >
                    { " Delete" }
                </button>
                <button
                    type="button"
                    class="btn edit-btn bi-btn bi-pencil-fill"
                    onclick={ on_action.reform(move |_| Action::StartEdit(id)) }
                >
                    { " Edit" }
                </button>
            </div>
        },
        Actions::Reply => html! {
            <div class="comment-actions">
                <button
                    type="button"
                    class="btn reply-btn bi-btn bi-reply-fill"
                    onclick={ on_action.reform(move |_| Action::StartReply(id)) }
                >
                    { " Reply" }
                </button>
            </div>
        },
    }
}

fn body(body: &Body, on_action: &Callback<Action>) -> Html {
    match body {
        Body::Content { replying_to, text } => html! {
            <div class="comment-content">
                { for replying_to.as_ref().map(|to| html! {
                    <span class="replying-to">{ format!("@{to}") }</span>
                }) }
                { " " }{ text }
            </div>
        },
        Body::Editing { draft } => html! {
            <div class="comment-content">
                <ui::EditForm
                    draft={ draft.clone() }
                    on_submit={ on_action.reform(Action::SubmitEdit) }
                    on_cancel={ on_action.reform(|_| Action::CancelForm) }
                />
            </div>
        },
    }
}
