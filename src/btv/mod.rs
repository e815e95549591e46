//! Parsers for bTV+ page markup.
//!
//! The site has no API; everything is recovered from fixed structural paths
//! in server-rendered HTML. A markup change upstream shows up here as empty
//! fields or empty listings rather than hard errors, except where a field is
//! required (see [`show::parse_show_detail`]).

pub mod clip;
pub mod listing;
pub mod show;

use scraper::{ElementRef, Selector};

pub use clip::locate_clip;
pub use listing::parse_listing;
pub use show::parse_show_detail;

/// Text of every element under `scope` matching `selector`, each
/// whitespace-collapsed, joined by a single space.
fn select_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `attr` of the first element under `scope` matching `selector` that has
/// it; empty when none does.
fn select_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    scope
        .select(selector)
        .find_map(|el| el.value().attr(attr))
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    #[test]
    fn text_joins_all_matches_and_collapses_whitespace() {
        let doc = Html::parse_fragment(
            "<div><p>  Първи\n  ред </p><p></p><p>вто<b>ри</b></p></div>",
        );
        let p = Selector::parse("p").unwrap();
        assert_eq!(select_text(doc.root_element(), &p), "Първи ред втори");
    }

    #[test]
    fn attr_takes_the_first_element_carrying_it() {
        let doc = Html::parse_fragment(r#"<div><img><img src="/b.jpg"><img src="/c.jpg"></div>"#);
        let img = Selector::parse("img").unwrap();
        assert_eq!(select_attr(doc.root_element(), &img, "src"), "/b.jpg");
        assert_eq!(select_attr(doc.root_element(), &img, "alt"), "");
    }
}
