use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::select_attr;
use crate::{
    models::ShowReference,
    urls::{normalize_present, site_link},
};

// Category pages wrap tiles in `li.rows`; the older series index uses `div.bg-order`.
static TILE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.rows > ul > li, div.bg-order > ul > li").unwrap());
static TILE_ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.image > a").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Extract the show tiles of a category page, in document order.
///
/// Tiles without a link or a thumbnail are skipped. A page without the tile
/// container yields an empty list.
pub fn parse_listing(html: &str, origin: &str) -> Vec<ShowReference> {
    let doc = Html::parse_document(html);

    let mut refs = Vec::new();
    for tile in doc.select(&TILE) {
        for anchor in tile.select(&TILE_ANCHOR) {
            let href = anchor.value().attr("href").unwrap_or_default();
            let src = select_attr(anchor, &IMG, "src");
            if href.trim().is_empty() || src.is_empty() {
                tracing::debug!("Skipping incomplete show tile (href={href:?}, src={src:?})");
                continue;
            }
            refs.push(ShowReference {
                link: site_link(origin, href),
                thumbnail_url: normalize_present(&src),
            });
        }
    }
    refs
}
