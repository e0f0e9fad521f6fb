mod config;
pub use config::Config;

mod render;
pub use render::{render, Actions, Body, CardView, FormKind, FormView, ThreadView};

mod state;
pub use state::{Action, AppState, Controller, Mode};

mod store;
pub use store::{KvStore, LoadError, MemoryStore, Persistence, SeedSource};

mod time;
pub use time::time_since;

pub mod api {
    pub use comments_api::*;
}
