use serde::{Deserialize, Serialize};

// ── Catalogue records ────────────────────────────────────────────────────────

/// A show tile on a category page, before its detail page is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowReference {
    pub link: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    /// Detail page this show was resolved from.
    pub link: String,
    pub title: String,
    pub thumbnail_url: String,
    pub description: String,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub link: String,
    pub thumbnail_url: String,
    pub name: String,
    pub duration_label: String,
    /// `false` when the site marks the episode as archived.
    pub is_available: bool,
}

/// Direct URL of a playable `.mp4` asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClipUrl(pub String);

impl ClipUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClipUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedClip {
    pub episode_link: String,
    pub clip_url: ClipUrl,
}

/// What a player or cast receiver needs to load an episode.
#[derive(Debug, Clone, Serialize)]
pub struct ClipSource {
    pub url: ClipUrl,
    pub content_type: &'static str,
}

impl From<ClipUrl> for ClipSource {
    fn from(url: ClipUrl) -> Self {
        Self {
            url,
            content_type: "video/mp4",
        }
    }
}

// ── Categories ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: &'static str,
    pub title: &'static str,
    pub link: String,
}

const CATEGORIES: [(&str, &str); 2] = [("predavaniya", "Предавания"), ("seriali", "Сериали")];

/// The fixed set of browsable categories on `origin`.
pub fn categories(origin: &str) -> Vec<Category> {
    let origin = origin.trim_end_matches('/');
    CATEGORIES
        .iter()
        .map(|&(slug, title)| Category {
            slug,
            title,
            link: format!("{origin}/{slug}/"),
        })
        .collect()
}

pub fn find_category(origin: &str, slug: &str) -> Option<Category> {
    categories(origin).into_iter().find(|c| c.slug == slug)
}

// ── Episode filtering ────────────────────────────────────────────────────────

/// How archived episodes are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodePolicy {
    /// Only episodes that can be played right now.
    Listing,
    /// Everything; clients render archived episodes as locked.
    Display,
}

impl EpisodePolicy {
    pub fn apply(self, show: Show) -> Show {
        match self {
            EpisodePolicy::Display => show,
            EpisodePolicy::Listing => Show {
                episodes: show
                    .episodes
                    .into_iter()
                    .filter(|e| e.is_available)
                    .collect(),
                ..show
            },
        }
    }
}
