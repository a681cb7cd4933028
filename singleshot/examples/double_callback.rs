//! Bridges a misbehaving callback API into async code.
//!
//! `LegacyDownloader::start` reports completion twice: once from its
//! worker thread and once more from a "watchdog" that thinks the worker
//! stalled. The guard delivers the first report and ignores the second.
//!
//! Run with `RUST_LOG=singleshot=trace cargo run --example double_callback`
//! to see the guard's decisions.

use singleshot::with_guarded_continuation;

use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum DownloadError {
    #[error("watchdog fired for {0}")]
    Stalled(String),
}

struct LegacyDownloader;

impl LegacyDownloader {
    fn start<F>(&self, url: &str, on_complete: F)
    where
        F: Fn(Result<Vec<u8>, DownloadError>) + Send + Sync + Clone + 'static,
    {
        let worker = on_complete.clone();
        let body = format!("payload from {url}").into_bytes();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            worker(Ok(body));
        });

        let url = url.to_string();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(25));
            on_complete(Err(DownloadError::Stalled(url)));
        });
    }
}

#[singleshot::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let downloader = LegacyDownloader;

    let result = with_guarded_continuation::<Vec<u8>, DownloadError, _>(|guard| {
        downloader.start("https://example.com/data", move |outcome| {
            if !guard.resume_with(outcome) {
                tracing::info!("late completion ignored");
            }
        });
    })
    .await;

    match result {
        Ok(bytes) => println!("downloaded {} bytes", bytes.len()),
        Err(err) => println!("download failed: {err}"),
    }

    // Let the watchdog fire into the spent guard before exiting.
    thread::sleep(Duration::from_millis(50));
}
