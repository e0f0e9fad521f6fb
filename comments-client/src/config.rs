use chrono::Duration;

/// Knobs of the comment widget, all defaulted
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Key of the store slot holding the serialized thread
    pub storage_key: String,

    /// Where the seed document gets fetched from when the store is empty
    pub seed_url: String,

    /// Seeded top-level comments get a creation date at most this many days in the past
    pub comment_age_window_days: i64,

    /// Same as `comment_age_window_days`, for replies
    pub reply_age_window_days: i64,
}

impl Config {
    pub fn comment_age_window(&self) -> Duration {
        Duration::days(self.comment_age_window_days.max(0))
    }

    pub fn reply_age_window(&self) -> Duration {
        Duration::days(self.reply_age_window_days.max(0))
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            storage_key: String::from("interactive-comments-data"),
            seed_url: String::from("data.json"),
            comment_age_window_days: 30,
            reply_age_window_days: 14,
        }
    }
}
