//! Static file server for the built dashboard bundle.
//!
//! Binds 127.0.0.1 only: the dashboard is an interactive local display,
//! not a public service. Files are read per-request from the dist
//! directory so a rebuild is picked up without restarting.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use log::info;

/// Serve the dashboard bundle from `dist` on `127.0.0.1:port`.
///
/// Blocks until the process is terminated.
pub async fn run_serve(dist: &str, port: u16) -> anyhow::Result<()> {
    let dist = PathBuf::from(dist);
    anyhow::ensure!(
        dist.is_dir(),
        "dist directory '{}' not found; build the dashboard first (dx build --release)",
        dist.display()
    );

    let app = router(Arc::new(dist));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("serving dashboard on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(dist: Arc<PathBuf>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{*path}", get(asset))
        .with_state(dist)
}

async fn index(State(dist): State<Arc<PathBuf>>) -> impl IntoResponse {
    serve_file(&dist, "index.html").await
}

async fn asset(
    State(dist): State<Arc<PathBuf>>,
    UrlPath(path): UrlPath<String>,
) -> impl IntoResponse {
    serve_file(&dist, &path).await
}

async fn serve_file(dist: &Path, rel: &str) -> (StatusCode, [(header::HeaderName, String); 1], Vec<u8>) {
    let Some(safe) = sanitize(rel) else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain".to_string())],
            b"not found".to_vec(),
        );
    };

    let full = dist.join(safe);
    match tokio::fs::read(&full).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type(rel).to_string())],
            bytes,
        ),
        Err(e) => {
            info!("asset miss {}: {}", full.display(), e);
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain".to_string())],
                b"not found".to_vec(),
            )
        }
    }
}

/// Reject paths that escape the dist directory.
///
/// Returns the path stripped to plain normal components, or `None` when it
/// contains parent/root components.
fn sanitize(rel: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}

/// MIME type by file extension, defaulting to octet-stream.
fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_covers_bundle_files() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("assets/app.js"), "application/javascript");
        assert_eq!(
            content_type("wasm/dashboard_bg.wasm"),
            "application/wasm"
        );
        assert_eq!(content_type("unknown.bin"), "application/octet-stream");
    }

    #[test]
    fn sanitize_accepts_nested_paths() {
        assert_eq!(
            sanitize("assets/app.js"),
            Some(PathBuf::from("assets/app.js"))
        );
    }

    #[test]
    fn sanitize_rejects_traversal() {
        assert!(sanitize("../secret").is_none());
        assert!(sanitize("assets/../../secret").is_none());
        assert!(sanitize("/etc/passwd").is_none());
    }

    #[test]
    fn sanitize_rejects_empty() {
        assert!(sanitize("").is_none());
        assert!(sanitize(".").is_none());
    }

    #[tokio::test]
    async fn serves_files_from_dist() {
        let dir = std::env::temp_dir().join(format!("cld-serve-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();

        let (status, headers, body) = serve_file(&dir, "index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[0].1, "text/html; charset=utf-8");
        assert_eq!(body, b"<html>dashboard</html>");

        let (status, _, _) = serve_file(&dir, "missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).ok();
    }
}
