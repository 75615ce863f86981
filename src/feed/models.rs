use serde::{Deserialize, Serialize};

/// One project exactly as the feed publishes it.
/// Unknown keys are ignored so newer dataset variants still load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedProject {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub status: String,
    pub length_km: f64,
    pub no_of_stations: Option<u32>,
    #[serde(default)]
    pub investment: String,
    pub from_station: Option<String>,
    pub to_station: Option<String>,
    pub operational_year: Option<i32>,
    pub completion_year: Option<i32>,
    pub line_number: Option<u32>,
    pub line_color: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Envelope of the fetched document. Projects are kept as raw values so
/// each one can be validated and reported on its own.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedDocument {
    pub projects: Vec<serde_json::Value>,
    pub last_updated: Option<String>,
}
