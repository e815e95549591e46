//! Test fixtures: bTV+-shaped pages and an in-process upstream to serve them.

use axum::{Router, response::Html, routing::get};

use crate::{catalog::Catalog, config::AppConfig};

// ── Page builders ────────────────────────────────────────────────────────────

pub fn listing_tile(href: &str, img: &str) -> String {
    format!(
        r#"<li>
  <div class="image"><a href="{href}"><img src="{img}" alt=""></a></div>
  <div class="meta"><a href="{href}">tile</a></div>
</li>"#
    )
}

pub fn listing_page(tiles: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>bTV Plus</title></head><body>
<ul class="categories">
  <li class="rows"><h3>Предавания</h3>
    <ul>
{}
    </ul>
  </li>
</ul>
</body></html>"#,
        tiles.join("\n")
    )
}

pub fn episode_block(href: &str, name: &str, archived: bool) -> String {
    let archive = if archived {
        r#"<div class="archive"></div>"#
    } else {
        ""
    };
    format!(
        r#"<li>
  <div class="image">
    <a href="{href}">
      <img src="//cdn.btv.bg{href}.jpg">
      <div class="video_length">45 мин.</div>
      {archive}
    </a>
  </div>
  <div class="meta"><a href="{href}">{name}</a></div>
</li>"#
    )
}

pub fn show_page(title: &str, episodes: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
<div class="pproduct-content">
  <div class="image"><img src="//cdn.btv.bg/cover.jpg"></div>
  <div class="title"><h2>{title}</h2></div>
  <div class="pproduct-description"><p>Описание на предаването.</p></div>
</div>
<div class="parent-products">
  <ul>
{}
  </ul>
</div>
</body></html>"#,
        episodes.join("\n")
    )
}

pub fn episode_page(clip_path: &str) -> String {
    format!(
        r#"<html><body><div id="player"></div>
<script>
  window.player = new Player({{
    file: "//vid.btv.bg{clip_path}",
    autostart: true
  }});
</script></body></html>"#
    )
}

// ── Fake upstream ────────────────────────────────────────────────────────────

/// Bind `router` on an ephemeral local port and return its origin.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve fixed HTML bodies at the given paths; anything else is a 404.
pub async fn serve_pages(pages: Vec<(&'static str, String)>) -> String {
    let router = pages.into_iter().fold(Router::new(), |router, (path, body)| {
        router.route(
            path,
            get(move || {
                let body = body.clone();
                async move { Html(body) }
            }),
        )
    });
    serve(router).await
}

pub fn catalog_for(origin: &str) -> Catalog {
    let config = AppConfig {
        site_origin: origin.to_string(),
        read_timeout_secs: 5,
        ..AppConfig::default()
    };
    Catalog::from_config(&config).unwrap()
}

/// Two show tiles: one healthy show with three episodes (the middle one
/// archived), one whose detail page has a blank title. Episode pages
/// exist for the first two episodes.
pub fn scenario_pages() -> Vec<(&'static str, String)> {
    vec![
        (
            "/predavaniya/",
            listing_page(&[
                listing_tile("/produkt/predavaniya/1/good", "//cdn.btv.bg/good.jpg"),
                listing_tile("/produkt/predavaniya/2/blank", "//cdn.btv.bg/blank.jpg"),
            ]),
        ),
        (
            "/produkt/predavaniya/1/good",
            show_page(
                "Добро шоу",
                &[
                    episode_block("/produkt/predavaniya/1/good/e1", "Епизод 1", false),
                    episode_block("/produkt/predavaniya/1/good/e2", "Епизод 2", true),
                    episode_block("/produkt/predavaniya/1/good/e3", "Епизод 3", false),
                ],
            ),
        ),
        ("/produkt/predavaniya/2/blank", show_page(" ", &[])),
        (
            "/produkt/predavaniya/1/good/e1",
            episode_page("/2024/01/good-e1.mp4"),
        ),
        (
            "/produkt/predavaniya/1/good/e2",
            episode_page("/2024/01/good-e2.mp4"),
        ),
    ]
}
