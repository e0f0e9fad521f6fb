use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ScoreCounterProps {
    pub score: u32,
    pub on_upvote: Callback<()>,
    pub on_downvote: Callback<()>,
}

#[function_component(ScoreCounter)]
pub fn score_counter(p: &ScoreCounterProps) -> Html {
    html! {
        <div class="score-counter">
            <button
                type="button"
                class="btn plus-btn bi-btn bi-plus-lg"
                aria-label="Upvote"
                onclick={ p.on_upvote.reform(|_| ()) }
            >
            </button>
            <span class="score">{ p.score }</span>
            <button
                type="button"
                class="btn minus-btn bi-btn bi-dash-lg"
                aria-label="Downvote"
                onclick={ p.on_downvote.reform(|_| ()) }
            >
            </button>
        </div>
    }
}
