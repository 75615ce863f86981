use clap::Parser;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone, Parser)]
#[command(name = "metrodash-server", version, about = "Serves metro project KPIs over HTTP")]
pub struct Config {
    /// Project feed, an http(s) URL or a file path. The embedded dataset is
    /// served when no source is given.
    #[arg(long, env = "METRODASH_SOURCE")]
    pub source: Option<String>,

    #[arg(long, env = "METRODASH_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Seconds between two fetches of the feed.
    #[arg(
        long,
        env = "METRODASH_POLL_SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Embedded,
    Url(String),
    Path(PathBuf),
}

impl Config {
    pub fn location(&self) -> FeedLocation {
        match self.source.as_deref().map(str::trim) {
            None | Some("") => FeedLocation::Embedded,
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                FeedLocation::Url(url.to_string())
            }
            Some(path) => FeedLocation::Path(PathBuf::from(path)),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_secs)
    }
}
