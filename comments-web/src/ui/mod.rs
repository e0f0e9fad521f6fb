mod app;
pub use app::{App, AppMsg};

mod comment_card;
pub use comment_card::CommentCard;

mod comment_form;
pub use comment_form::{CommentForm, EditForm};

mod delete_modal;
pub use delete_modal::DeleteModal;

mod load_error_banner;
pub use load_error_banner::LoadErrorBanner;

mod score_counter;
pub use score_counter::ScoreCounter;
