use crate::{config::FeedLocation, state::AppState};
use futures_util::StreamExt;
use metrodash::prelude::*;
use reqwest::header::ACCEPT_ENCODING;
use std::sync::Arc;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{error, info};

/// Logs what the store accepted, the HTTP handlers read the store directly.
struct LogObserver;

impl Observer for LogObserver {
    fn refreshed(&self, data: &Arc<LoadedData>) {
        info!(
            "Snapshot refreshed with {} projects (last updated {:?})",
            data.projects.len(),
            data.last_updated
        );
    }

    fn failed(&self, error: &feed::Error) {
        error!("Failed to refresh projects: {error}");
    }
}

/// Loads the configured feed once and applies the result to the store.
pub async fn refresh(state: Arc<AppState>) -> Outcome {
    let ticket = state.store.begin();
    let result = fetch(&state).await;
    state.store.apply(ticket, result, &LogObserver)
}

/// Refreshes on every poll tick. Each fetch runs as its own task so a slow
/// response never delays the next tick; the store drops late results.
pub fn spawn(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.config.poll_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately, the initial load already ran.
        interval.tick().await;
        loop {
            interval.tick().await;
            tokio::spawn(refresh(state.clone()));
        }
    })
}

async fn fetch(state: &AppState) -> Result<LoadedData, feed::Error> {
    let reader = match state.config.location() {
        FeedLocation::Embedded => FeedReader::new(),
        FeedLocation::Path(path) => FeedReader::new().from_bytes(tokio::fs::read(&path).await?),
        FeedLocation::Url(url) => FeedReader::new().from_bytes(download(&state.client, &url).await?),
    };
    LoadedData::load(&reader)
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, feed::Error> {
    let response = client
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await
        .map_err(|err| feed::Error::Network(format!("Failed to fetch {url}: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Response is not success: {body}");
        return Err(feed::Error::Network(format!("{url} answered {status}")));
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let data = chunk
            .map_err(|err| feed::Error::Network(format!("Failed to fetch chunk: {err}")))?;
        body.extend_from_slice(&data);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    fn state_with_source(source: &Path) -> Arc<AppState> {
        let config = Config::try_parse_from([
            "metrodash-server",
            "--source",
            source.to_str().unwrap(),
        ])
        .unwrap();
        Arc::new(AppState::new(config))
    }

    fn temp_feed(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "metrodash-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn embedded_refresh_replaces_then_is_unchanged() {
        let config = Config::try_parse_from(["metrodash-server"]).unwrap();
        let state = Arc::new(AppState::new(config));
        assert_eq!(refresh(state.clone()).await, Outcome::Replaced);
        assert_eq!(refresh(state.clone()).await, Outcome::Unchanged);
        assert_eq!(state.store.current().unwrap().projects.len(), 17);
    }

    #[tokio::test]
    async fn malformed_feed_keeps_previous_snapshot() {
        let path = temp_feed(
            "malformed",
            r#"{"projects": [{"id": 1, "name": "Circle Line", "city": "Singapore",
                "country": "Singapore", "region": "Asia", "status": "operational",
                "lengthKm": 35.4, "investment": "SGD 5.7B"}]}"#,
        );
        let state = state_with_source(&path);
        assert_eq!(refresh(state.clone()).await, Outcome::Replaced);
        let before = state.store.current().unwrap();

        std::fs::write(&path, "{\"projects\": [").unwrap();
        assert_eq!(refresh(state.clone()).await, Outcome::Failed);
        let after = state.store.current().unwrap();
        assert!(Arc::ptr_eq(&before, &after));

        let status = state.store.status();
        assert_eq!(status.last_error.map(|(kind, _)| kind), Some("parse"));
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn overlapping_refresh_keeps_newest() {
        let path = temp_feed(
            "overlap",
            r#"[{"id": 1, "name": "Circle Line", "city": "Singapore",
                "country": "Singapore", "region": "Asia", "status": "operational",
                "lengthKm": 35.4, "investment": "SGD 5.7B"}]"#,
        );
        let state = state_with_source(&path);

        // A slow fetch is still in flight when the next tick refreshes.
        let slow = state.store.begin();
        assert_eq!(refresh(state.clone()).await, Outcome::Replaced);
        let current = state.store.current().unwrap();

        let late = fetch(&state).await;
        assert_eq!(state.store.apply(slow, late, &LogObserver), Outcome::Stale);
        assert!(Arc::ptr_eq(&current, &state.store.current().unwrap()));
        assert_eq!(state.store.status().applied, 2);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let path = std::env::temp_dir().join("metrodash-does-not-exist.json");
        let state = state_with_source(&path);
        assert_eq!(refresh(state.clone()).await, Outcome::Failed);
        assert!(state.store.current().is_none());
    }
}
