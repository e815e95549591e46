use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::ScrapeError, models::ClipUrl, urls::normalize};

/// Find the `.mp4` asset on the video CDN referenced anywhere in an episode
/// page, including inline player scripts.
pub fn locate_clip(html: &str) -> Result<ClipUrl, ScrapeError> {
    static RE_CLIP: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"//vid\.btv\.bg[A-Za-z0-9_/-]+\.mp4").unwrap());

    RE_CLIP
        .find(html)
        .map(|m| ClipUrl(normalize(m.as_str())))
        .ok_or(ScrapeError::NotFound)
}
