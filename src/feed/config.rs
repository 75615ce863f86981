pub struct Config {
    /// Document served by [`super::Source::Embedded`].
    pub embedded: &'static str,
    /// Accepted `lastUpdated` layouts besides RFC 3339, read as UTC.
    pub datetime_formats: Vec<String>,
    /// Accepted date-only `lastUpdated` layouts, read as UTC midnight.
    pub date_formats: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedded: include_str!("../../data/projects.json"),
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".into(),
                "%Y-%m-%d %H:%M:%S%.f".into(),
                "%Y-%m-%dT%H:%M".into(),
                "%Y-%m-%d %H:%M".into(),
            ],
            date_formats: vec!["%Y-%m-%d".into()],
        }
    }
}
