use anyhow::{anyhow, Context};
use comments_client::{api::SeedDocument, Config, KvStore, SeedSource};
use gloo_storage::{LocalStorage, Storage};

/// The browser's `localStorage`
pub struct LocalStore;

impl KvStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(v) => v,
            Err(err) => {
                tracing::error!(?err, key, "failed reading from local storage");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|err| anyhow!("local storage refused the write: {err:?}"))
    }
}

/// Seed document served alongside the app
pub struct HttpSeed {
    url: String,
}

impl HttpSeed {
    pub fn new(config: &Config) -> HttpSeed {
        HttpSeed {
            url: config.seed_url.clone(),
        }
    }

    /// reqwest cannot deal with relative urls in the browser, so resolve against the page url
    fn resolved_url(&self) -> anyhow::Result<reqwest::Url> {
        let page = web_sys::window()
            .ok_or_else(|| anyhow!("not running in a browser window"))?
            .location()
            .href()
            .map_err(|err| anyhow!("failed reading page location: {err:?}"))?;
        let page = reqwest::Url::parse(&page).context("parsing page location")?;
        page.join(&self.url)
            .with_context(|| format!("resolving seed url {:?}", self.url))
    }
}

#[async_trait::async_trait(?Send)]
impl SeedSource for HttpSeed {
    async fn fetch_seed(&self) -> anyhow::Result<SeedDocument> {
        let url = self.resolved_url()?;
        tracing::info!(%url, "fetching seed document");
        crate::CLIENT
            .get(url)
            .send()
            .await
            .context("fetching seed document")?
            .error_for_status()
            .context("seed document response was not ok")?
            .json()
            .await
            .context("parsing seed document")
    }
}
