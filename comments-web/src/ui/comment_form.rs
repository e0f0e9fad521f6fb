use comments_client::{api::validate_content, FormView};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub form: FormView,
    #[prop_or_default]
    pub autofocus: bool,
    pub on_submit: Callback<String>,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
}

/// New comment or reply form
#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let textarea = use_node_ref();
    use_focus_on_mount(&textarea, p.autofocus);

    let onsubmit = {
        let textarea = textarea.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let elt = textarea
                .cast::<HtmlTextAreaElement>()
                .expect("comment form textarea is not a textarea");
            let text = elt.value();
            // Accepted submissions are gone from the form, rejected ones stay for fixing
            if validate_content(&text).is_ok() {
                elt.set_value("");
            }
            on_submit.emit(text);
        })
    };

    html! {
        <form id={ p.id.clone() } class="comment-form" onsubmit={ onsubmit }>
            <img src={ p.form.avatar.png.clone() } alt="Your avatar" class="user-avatar" />
            <textarea
                ref={ textarea }
                name="comment"
                placeholder={ p.form.placeholder() }
                onkeydown={ escape_cancels(&p.on_cancel) }
            />
            <button type="submit" class="btn">{ p.form.submit_label() }</button>
        </form>
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct EditFormProps {
    pub draft: String,
    pub on_submit: Callback<String>,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
}

/// In-place edit of an existing comment
#[function_component(EditForm)]
pub fn edit_form(p: &EditFormProps) -> Html {
    let textarea = use_node_ref();
    use_focus_on_mount(&textarea, true);

    let onsubmit = {
        let textarea = textarea.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let elt = textarea
                .cast::<HtmlTextAreaElement>()
                .expect("edit form textarea is not a textarea");
            on_submit.emit(elt.value());
        })
    };

    html! {
        <form class="edit-form" onsubmit={ onsubmit }>
            <textarea
                ref={ textarea }
                class="edit-textarea"
                value={ p.draft.clone() }
                onkeydown={ escape_cancels(&p.on_cancel) }
            />
            <button type="submit" class="btn update-btn">{ "Update" }</button>
        </form>
    }
}

fn escape_cancels(on_cancel: &Callback<()>) -> Callback<KeyboardEvent> {
    let on_cancel = on_cancel.clone();
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            on_cancel.emit(());
        }
    })
}

#[hook]
fn use_focus_on_mount(textarea: &NodeRef, enabled: bool) {
    let textarea = textarea.clone();
    use_effect_with_deps(
        move |_| {
            if enabled {
                if let Some(elt) = textarea.cast::<HtmlTextAreaElement>() {
                    if let Err(err) = elt.focus() {
                        tracing::warn!(?err, "failed focusing comment textarea");
                    }
                }
            }
            || ()
        },
        (),
    );
}
