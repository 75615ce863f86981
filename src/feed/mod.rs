use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::{
    fs,
    io,
    path::PathBuf,
    time::Instant,
};
use thiserror::Error;
use tracing::debug;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Shape error: {0}")]
    Shape(String),
}

impl Error {
    /// Short machine readable tag, used by status reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Network(_) => "network",
            Error::Io(_) => "io",
            Error::Parse(_) => "parse",
            Error::Shape(_) => "shape",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub enum Source {
    /// The dataset compiled into the crate.
    #[default]
    Embedded,
    Path(PathBuf),
    /// An already fetched document body.
    Bytes(Vec<u8>),
}

/// A decoded feed document, not yet validated.
#[derive(Debug, Default, Clone)]
pub struct Feed {
    pub projects: Vec<FeedProject>,
    pub last_updated: Option<DateTime<FixedOffset>>,
}

#[derive(Default)]
pub struct FeedReader {
    config: Config,
    source: Source,
}

impl FeedReader {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(config: self::Config) -> Self {
        Self {
            config,
            source: Default::default(),
        }
    }

    pub fn from_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn from_path<P: Into<PathBuf>>(self, path: P) -> Self {
        self.from_source(Source::Path(path.into()))
    }

    pub fn from_bytes<B: Into<Vec<u8>>>(self, bytes: B) -> Self {
        self.from_source(Source::Bytes(bytes.into()))
    }

    /// Reads and decodes the configured source.
    ///
    /// Invalid JSON is a [`Error::Parse`]; valid JSON with the wrong layout,
    /// missing keys or wrongly typed values is a [`Error::Shape`].
    pub fn read(&self) -> Result<Feed, self::Error> {
        let now = Instant::now();
        let feed = match &self.source {
            Source::Embedded => self.decode(self.config.embedded.as_bytes()),
            Source::Path(path) => self.decode(&fs::read(path)?),
            Source::Bytes(bytes) => self.decode(bytes),
        }?;
        debug!(
            "Reading {} projects took {:?}",
            feed.projects.len(),
            now.elapsed()
        );
        Ok(feed)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Feed, self::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        let (raw_projects, last_updated) = match value {
            // The embedded variant is a bare list without an envelope
            Value::Array(items) => (items, None),
            Value::Object(_) => {
                let document: FeedDocument = serde_json::from_value(value)
                    .map_err(|err| Error::Shape(format!("document: {err}")))?;
                (document.projects, document.last_updated)
            }
            other => {
                return Err(Error::Shape(format!(
                    "expected an object or an array, found {}",
                    value_kind(&other)
                )));
            }
        };

        let last_updated = last_updated
            .map(|text| {
                self.parse_timestamp(&text).ok_or_else(|| {
                    Error::Shape(format!("unrecognized lastUpdated timestamp: {text}"))
                })
            })
            .transpose()?;

        let projects = raw_projects
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                serde_json::from_value::<FeedProject>(value)
                    .map_err(|err| Error::Shape(format!("project #{i}: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Feed {
            projects,
            last_updated,
        })
    }

    pub fn parse_timestamp(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        let text = text.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
            return Some(timestamp);
        }
        let datetime = self
            .config
            .datetime_formats
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok());
        if let Some(datetime) = datetime {
            return Some(datetime.and_utc().fixed_offset());
        }
        self.config
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| datetime.and_utc().fixed_offset())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
