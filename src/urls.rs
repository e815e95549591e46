//! URL helpers for links and image sources scraped from bTV+ pages.
//!
//! The site emits protocol-relative image/video URLs (`//cdn…`) and
//! site-relative page links (`/predavaniya/…`); everything leaving the
//! engine is absolute.

/// Prefix a protocol-relative URL with `https:`. URLs that already carry an
/// HTTP scheme are returned unchanged.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https:{raw}")
    }
}

/// Like [`normalize`], but a missing (empty) value stays empty instead of
/// becoming a bare `https:`.
pub fn normalize_present(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        String::new()
    } else {
        normalize(raw)
    }
}

/// Turn a site-relative `href` into an absolute link on `origin`.
pub fn site_link(origin: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    if href.starts_with("http") {
        return href.to_string();
    }
    if href.starts_with("//") {
        return normalize(href);
    }

    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_leaves_absolute_urls_alone() {
        assert_eq!(normalize("http://a"), "http://a");
        assert_eq!(normalize("https://a/b.jpg"), "https://a/b.jpg");
    }

    #[test]
    fn normalize_prefixes_protocol_relative_urls() {
        assert_eq!(normalize("//a/b"), "https://a/b");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["", "//a/b", "http://a", "https://x/y", "img.png", "ftp://z"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn normalize_present_keeps_missing_values_empty() {
        assert_eq!(normalize_present(""), "");
        assert_eq!(normalize_present("  "), "");
        assert_eq!(normalize_present("//cdn/x.jpg"), "https://cdn/x.jpg");
    }

    #[test]
    fn site_link_joins_origin_and_path() {
        assert_eq!(site_link("https://btvplus.bg", "/a"), "https://btvplus.bg/a");
        assert_eq!(site_link("https://btvplus.bg/", "/a"), "https://btvplus.bg/a");
        assert_eq!(site_link("https://btvplus.bg/", "a/b"), "https://btvplus.bg/a/b");
        assert_eq!(
            site_link("https://btvplus.bg", "https://other.bg/x"),
            "https://other.bg/x"
        );
        assert_eq!(site_link("https://btvplus.bg", ""), "");
    }
}
