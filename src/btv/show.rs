use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{select_attr, select_text};
use crate::{
    error::ScrapeError,
    models::{Episode, Show},
    urls::{normalize_present, site_link},
};

static PRODUCT: Lazy<Selector> = Lazy::new(|| Selector::parse("div.pproduct-content").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.title > h2").unwrap());
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.pproduct-description").unwrap());
static COVER: Lazy<Selector> = Lazy::new(|| Selector::parse("div.image > img").unwrap());

static EPISODE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.parent-products > ul > li").unwrap());
static EPISODE_ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.image > a").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static LENGTH: Lazy<Selector> = Lazy::new(|| Selector::parse("div.video_length").unwrap());
static ARCHIVE: Lazy<Selector> = Lazy::new(|| Selector::parse(".archive").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("div.meta a").unwrap());

/// Parse a show detail page.
///
/// Only the title is required; a page whose title is missing or blank is
/// rejected with [`ScrapeError::Parse`]. Every other field falls back to an
/// empty string. The returned show has an empty `link`; callers know which
/// page they fetched.
pub fn parse_show_detail(html: &str, origin: &str) -> Result<Show, ScrapeError> {
    let doc = Html::parse_document(html);

    let content = doc
        .select(&PRODUCT)
        .next()
        .ok_or(ScrapeError::Parse {
            reason: "missing-title",
        })?;

    let title = select_text(content, &TITLE);
    if title.is_empty() {
        return Err(ScrapeError::Parse {
            reason: "missing-title",
        });
    }

    let description = select_text(content, &DESCRIPTION);
    let thumbnail_url = normalize_present(&select_attr(content, &COVER, "src"));

    let episodes = doc
        .select(&EPISODE)
        .map(|item| {
            let anchor = item.select(&EPISODE_ANCHOR).next();
            let (link, thumbnail_url, duration_label, is_available) = match anchor {
                Some(a) => (
                    site_link(origin, a.value().attr("href").unwrap_or_default()),
                    normalize_present(&select_attr(a, &IMG, "src")),
                    select_text(a, &LENGTH),
                    a.select(&ARCHIVE).next().is_none(),
                ),
                None => (String::new(), String::new(), String::new(), true),
            };

            Episode {
                link,
                thumbnail_url,
                name: select_text(item, &NAME),
                duration_label,
                is_available,
            }
        })
        .collect();

    Ok(Show {
        link: String::new(),
        title,
        thumbnail_url,
        description,
        episodes,
    })
}
