//! Preview server for the generated page
//!
//! Serves `public_dir` as static files. With watching on, the page is
//! served with a small script that polls the build generation and reloads
//! once a rebuild has landed.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::watcher;
use crate::Site;

/// Route the page polls for the current build generation
const GENERATION_ROUTE: &str = "/__generation";

const RELOAD_SCRIPT: &str = r#"<script>
(function () {
  var seen = null;
  setInterval(function () {
    fetch('/__generation', { cache: 'no-store' })
      .then(function (res) { return res.text(); })
      .then(function (generation) {
        if (seen !== null && generation !== seen) location.reload();
        seen = generation;
      })
      .catch(function () {});
  }, 1000);
})();
</script>
"#;

struct Preview {
    public_dir: PathBuf,
    live_reload: bool,
    /// Successful rebuilds since the server started
    generation: AtomicU64,
}

/// Serve the generated site, rebuilding on changes when `watch` is set
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    let preview = Arc::new(Preview {
        public_dir: site.public_dir.clone(),
        live_reload: watch,
        generation: AtomicU64::new(0),
    });

    if watch {
        let site = site.clone();
        let preview = Arc::clone(&preview);
        tokio::task::spawn_blocking(move || {
            let watched = watcher::watch(&site, |generation| {
                preview.generation.store(generation, Ordering::SeqCst);
            });
            if let Err(e) = watched {
                tracing::error!("File watcher error: {:#}", e);
            }
        });
    }

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Serving {:?} at http://{}:{}", site.public_dir, ip, port);
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router(preview)).await?;

    Ok(())
}

fn router(preview: Arc<Preview>) -> Router {
    let assets = ServeDir::new(&preview.public_dir);

    Router::new()
        .route("/", get(page))
        .route("/index.html", get(page))
        .route(GENERATION_ROUTE, get(generation))
        .fallback_service(assets)
        .with_state(preview)
        .layer(TraceLayer::new_for_http())
}

async fn page(State(preview): State<Arc<Preview>>) -> Response {
    let path = preview.public_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) if preview.live_reload => Html(with_reload_script(&html)).into_response(),
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Cannot read {:?}: {}", path, e);
            (StatusCode::NOT_FOUND, "Page not generated yet").into_response()
        }
    }
}

async fn generation(State(preview): State<Arc<Preview>>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        preview.generation.load(Ordering::SeqCst).to_string(),
    )
}

/// Insert the reload script before the closing body tag, or append it
pub fn with_reload_script(html: &str) -> String {
    let at = html.rfind("</body>").unwrap_or(html.len());
    let mut out = String::with_capacity(html.len() + RELOAD_SCRIPT.len());
    out.push_str(&html[..at]);
    out.push_str(RELOAD_SCRIPT);
    out.push_str(&html[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn preview(dir: &std::path::Path, live_reload: bool) -> Arc<Preview> {
        Arc::new(Preview {
            public_dir: dir.to_path_buf(),
            live_reload,
            generation: AtomicU64::new(0),
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_reload_script_goes_before_body_end() {
        let html = "<html><body><p>x</p></body></html>";
        let served = with_reload_script(html);
        assert!(served.contains(GENERATION_ROUTE));
        assert!(served.starts_with("<html><body><p>x</p><script>"));
        assert!(served.ends_with("</script>\n</body></html>"));
    }

    #[test]
    fn test_reload_script_appended_without_body() {
        let served = with_reload_script("<p>fragment</p>");
        assert!(served.starts_with("<p>fragment</p><script>"));
    }

    #[tokio::test]
    async fn test_page_injects_script_only_when_watching() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<body>hi</body>").unwrap();

        let watching = page(State(preview(dir.path(), true))).await;
        assert_eq!(watching.status(), StatusCode::OK);
        assert!(body_text(watching).await.contains(GENERATION_ROUTE));

        let plain = page(State(preview(dir.path(), false))).await;
        assert_eq!(body_text(plain).await, "<body>hi</body>");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let response = page(State(preview(dir.path(), true))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generation_reports_rebuilds() {
        let dir = tempfile::tempdir().unwrap();
        let preview = preview(dir.path(), true);
        preview.generation.store(3, Ordering::SeqCst);

        let response = generation(State(preview)).await.into_response();
        assert_eq!(body_text(response).await, "3");
    }
}
