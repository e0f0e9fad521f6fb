use chrono::Utc;
use comments_client::{
    api::Thread, Action, Config, Controller, LoadError, Persistence,
};
use yew::prelude::*;

use crate::{
    api::{HttpSeed, LocalStore},
    ui,
};

pub enum AppMsg {
    Loaded(Result<Thread, LoadError>),
    User(Action),
}

enum LoadState {
    Loading,
    Failed,
    Ready(Controller<LocalStore>),
}

pub struct App {
    config: Config,
    state: LoadState,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Config::default();

        // Load the thread, from local storage or from the seed document
        {
            let config = config.clone();
            ctx.link().send_future(async move {
                let mut persistence = Persistence::new(LocalStore, &config);
                let seed = HttpSeed::new(&config);
                let mut rng = rand::thread_rng();
                let res = persistence
                    .load(&seed, &config, &mut rng, Utc::now())
                    .await;
                AppMsg::Loaded(res)
            });
        }

        App {
            config,
            state: LoadState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Loaded(Ok(thread)) => {
                let persistence = Persistence::new(LocalStore, &self.config);
                self.state = LoadState::Ready(Controller::new(thread, persistence));
                true
            }
            AppMsg::Loaded(Err(err)) => {
                tracing::error!(?err, "failed loading comments");
                self.state = LoadState::Failed;
                true
            }
            AppMsg::User(action) => match &mut self.state {
                LoadState::Ready(controller) => controller.dispatch(action, Utc::now()),
                _ => {
                    tracing::warn!(?action, "got user action before comments were loaded");
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controller = match &self.state {
            LoadState::Loading => return html! {},
            LoadState::Failed => return html! { <ui::LoadErrorBanner /> },
            LoadState::Ready(c) => c,
        };
        let view = controller.render(Utc::now());
        let on_action = ctx.link().callback(AppMsg::User);

        html! {
            <>
                <main class="container">
                    <div id="comments-container" class="comments-container">
                        { for view.cards.into_iter().map(|card| {
                            let key = card.id.0;
                            html! {
                                <ui::CommentCard key={ key } card={ card } on_action={ on_action.clone() } />
                            }
                        }) }
                    </div>
                    <ui::CommentForm
                        id="new-comment-form"
                        form={ view.composer }
                        on_submit={ on_action.reform(Action::SubmitComment) }
                    />
                </main>
                <ui::DeleteModal
                    open={ view.delete_modal_open }
                    on_cancel={ on_action.reform(|_| Action::CancelDelete) }
                    on_confirm={ on_action.reform(|_| Action::ConfirmDelete) }
                />
            </>
        }
    }
}
