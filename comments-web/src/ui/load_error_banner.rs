use yew::prelude::*;

#[function_component(LoadErrorBanner)]
pub fn load_error_banner() -> Html {
    html! {
        <div id="comments-container" class="comments-container">
            <p class="load-error">{ "Error loading comments. Please try again later." }</p>
        </div>
    }
}
