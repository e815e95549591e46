/// Catalogue resolution: category pages, show details and clips, fetched
/// concurrently with per-item failure isolation.
///
/// Top-level calls (`list_category`, `show`, `clip`) propagate their errors.
/// Batch calls (`resolve_shows`, `resolve_clips`) spawn one task per item,
/// drop the items that fail or panic, and never fail themselves.
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{
    btv,
    config::AppConfig,
    error::ScrapeError,
    fetch::PageFetcher,
    models::{Category, ClipUrl, EpisodePolicy, ResolvedClip, Show, ShowReference},
};

#[derive(Debug, Clone)]
pub struct Catalog {
    fetcher: PageFetcher,
    origin: Arc<str>,
    limiter: Option<Arc<Semaphore>>,
}

impl Catalog {
    pub fn new(fetcher: PageFetcher, origin: &str, fan_out_limit: Option<usize>) -> Self {
        Self {
            fetcher,
            origin: Arc::from(origin.trim_end_matches('/')),
            limiter: fan_out_limit.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let fetcher = PageFetcher::new(config)?;
        Ok(Self::new(fetcher, &config.site_origin, config.fan_out_limit()))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Fetch a category page and return its show tiles.
    pub async fn list_category(&self, link: &str) -> Result<Vec<ShowReference>, ScrapeError> {
        let html = self.fetcher.fetch(link).await?;
        let refs = btv::parse_listing(&html, &self.origin);
        if refs.is_empty() {
            tracing::warn!("No show tiles found on {link}; page layout may have changed");
        } else {
            tracing::debug!("{} show tile(s) on {link}", refs.len());
        }
        Ok(refs)
    }

    /// Fetch and parse one show detail page.
    pub async fn show(&self, link: &str) -> Result<Show, ScrapeError> {
        let html = self.fetcher.fetch(link).await?;
        let show = btv::parse_show_detail(&html, &self.origin)?;
        Ok(Show {
            link: link.to_string(),
            ..show
        })
    }

    /// Fetch an episode page and locate its video clip.
    pub async fn clip(&self, episode_link: &str) -> Result<ClipUrl, ScrapeError> {
        let html = self.fetcher.fetch(episode_link).await?;
        btv::locate_clip(&html)
    }

    /// Resolve every reference to a full show. Results follow input order.
    pub async fn resolve_shows(&self, refs: &[ShowReference]) -> Vec<Show> {
        let links = refs.iter().map(|r| r.link.clone()).collect();
        let shows = self
            .fan_out(links, |catalog, link| async move { catalog.show(&link).await })
            .await;
        tracing::info!("Resolved {}/{} show(s)", shows.len(), refs.len());
        shows
    }

    /// Resolve the clip of every episode link, skipping episodes without one.
    pub async fn resolve_clips(&self, episode_links: &[String]) -> Vec<ResolvedClip> {
        self.fan_out(episode_links.to_vec(), |catalog, link| async move {
            let clip = catalog.clip(&link).await;
            clip.map(|clip_url| ResolvedClip {
                episode_link: link,
                clip_url,
            })
        })
        .await
    }

    /// List a category and resolve all of its shows under `policy`.
    pub async fn category_shows(
        &self,
        category: &Category,
        policy: EpisodePolicy,
    ) -> Result<Vec<Show>, ScrapeError> {
        let refs = self.list_category(&category.link).await?;
        let shows = self.resolve_shows(&refs).await;
        Ok(shows.into_iter().map(|s| policy.apply(s)).collect())
    }

    /// One spawned task per link, gated by the limiter when one is set.
    /// Errors and panics drop only their own item; the rest come back in
    /// input order.
    async fn fan_out<T, F, Fut>(&self, links: Vec<String>, resolve: F) -> Vec<T>
    where
        T: Send + 'static,
        F: Fn(Catalog, String) -> Fut,
        Fut: Future<Output = Result<T, ScrapeError>> + Send + 'static,
    {
        let handles: Vec<_> = links
            .into_iter()
            .map(|link| {
                let limiter = self.limiter.clone();
                let task = resolve(self.clone(), link.clone());
                let handle = tokio::spawn(async move {
                    let _permit = match limiter {
                        Some(sem) => sem.acquire_owned().await.ok(),
                        None => None,
                    };
                    task.await
                });
                (link, handle)
            })
            .collect();

        let mut items = Vec::with_capacity(handles.len());
        for (link, handle) in handles {
            match handle.await {
                Ok(Ok(item)) => items.push(item),
                Ok(Err(e)) => tracing::warn!("Dropping {link}: {e}"),
                Err(e) => tracing::warn!("Dropping {link}: {e}"),
            }
        }
        items
    }
}
