use std::collections::HashMap;

use anyhow::Context;
use chrono::Duration;
use rand::Rng;

use crate::{
    api::{Depth, SeedDocument, Thread, Time},
    Config,
};

/// String-keyed slot storage, eg. the browser's `localStorage`
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore(HashMap::new())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.0.insert(String::from(key), value);
        Ok(())
    }
}

/// Provider of the document the thread gets bootstrapped from
#[async_trait::async_trait(?Send)]
pub trait SeedSource {
    async fn fetch_seed(&self) -> anyhow::Result<SeedDocument>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed fetching seed document")]
    SeedFetch(#[source] anyhow::Error),

    #[error("stored comment thread is corrupt")]
    CorruptSnapshot(#[from] serde_json::Error),
}

pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KvStore> Persistence<S> {
    pub fn new(store: S, config: &Config) -> Persistence<S> {
        Persistence {
            store,
            key: config.storage_key.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored thread, bootstrapping it from `seed` if the store is empty
    ///
    /// Seeded comments get a random creation date in the recent past, so that relative
    /// dates look lively. The seeded thread is saved before being returned.
    pub async fn load<F, R>(
        &mut self,
        seed: &F,
        config: &Config,
        rng: &mut R,
        now: Time,
    ) -> Result<Thread, LoadError>
    where
        F: SeedSource + ?Sized,
        R: Rng,
    {
        if let Some(snapshot) = self.store.get(&self.key) {
            let thread: Thread = serde_json::from_str(&snapshot)?;
            tracing::info!(comments = thread.len(), "loaded comment thread from store");
            return Ok(thread);
        }

        let doc = seed.fetch_seed().await.map_err(LoadError::SeedFetch)?;
        let comment_window = config.comment_age_window();
        let reply_window = config.reply_age_window();
        let thread = doc.into_thread(|depth| match depth {
            Depth::TopLevel => random_recent(now, comment_window, rng),
            Depth::Reply => random_recent(now, reply_window, rng),
        });
        tracing::info!(comments = thread.len(), "bootstrapped comment thread from seed");
        self.save(&thread);
        Ok(thread)
    }

    pub fn try_save(&mut self, thread: &Thread) -> anyhow::Result<()> {
        let snapshot = serde_json::to_string(thread).context("serializing comment thread")?;
        self.store
            .set(&self.key, snapshot)
            .with_context(|| format!("writing comment thread to store slot {:?}", self.key))
    }

    /// Overwrite the stored snapshot, logging failures as the user cannot do anything about them
    pub fn save(&mut self, thread: &Thread) {
        if let Err(err) = self.try_save(thread) {
            tracing::error!(?err, "failed saving comment thread");
        }
    }
}

fn random_recent<R: Rng>(now: Time, window: Duration, rng: &mut R) -> Time {
    let window_ms = window.num_milliseconds();
    if window_ms <= 0 {
        return now;
    }
    now - Duration::milliseconds(rng.gen_range(0..window_ms))
}
