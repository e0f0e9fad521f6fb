use web_sys::Element;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct DeleteModalProps {
    pub open: bool,
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(DeleteModal)]
pub fn delete_modal(p: &DeleteModalProps) -> Html {
    let overlay = use_node_ref();

    // Clicks on the dimmed area around the dialog dismiss it, clicks inside do not
    let on_overlay_click = {
        let overlay = overlay.clone();
        let on_cancel = p.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked = e.target_dyn_into::<Element>();
            if clicked.is_some() && clicked == overlay.cast::<Element>() {
                on_cancel.emit(());
            }
        })
    };

    html! {
        <div
            ref={ overlay }
            id="delete-modal-overlay"
            class={ classes!("modal-overlay", (!p.open).then(|| "hidden")) }
            aria-hidden={ if p.open { "false" } else { "true" } }
            onclick={ on_overlay_click }
        >
            <div class="modal" role="dialog" aria-labelledby="delete-modal-title">
                <h2 id="delete-modal-title">{ "Delete comment" }</h2>
                <p>
                    { "Are you sure you want to delete this comment? " }
                    { "This will remove the comment and can't be undone." }
                </p>
                <div class="modal-buttons">
                    <button
                        type="button"
                        id="modal-cancel"
                        class="btn btn-cancel"
                        onclick={ p.on_cancel.reform(|_| ()) }
                    >
                        { "No, cancel" }
                    </button>
                    <button
                        type="button"
                        id="modal-confirm"
                        class="btn btn-confirm"
                        onclick={ p.on_confirm.reform(|_| ()) }
                    >
                        { "Yes, delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
