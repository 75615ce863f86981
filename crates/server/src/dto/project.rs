use metrodash::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyDto {
    pub currency: String,
    /// Billions of `currency`.
    pub magnitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub status: String,
    pub length_km: f64,
    pub stations: Option<u32>,
    pub investment: String,
    pub investment_amount: Option<MoneyDto>,
    pub from_station: Option<String>,
    pub to_station: Option<String>,
    pub line_number: Option<u32>,
    /// Opening year of open lines, expected completion year otherwise.
    pub year: Option<i32>,
    pub operational_year: Option<i32>,
    pub completion_year: Option<i32>,
    pub line_color: Option<String>,
    pub description: String,
}

impl ProjectDto {
    pub fn from(project: &Project) -> Self {
        let (operational_year, completion_year) = match project.opening {
            Some(Opening::Operational(year)) => (Some(year), None),
            Some(Opening::Completion(year)) => (None, Some(year)),
            None => (None, None),
        };
        Self {
            id: project.id,
            name: project.name.to_string(),
            city: project.city.to_string(),
            country: project.country.to_string(),
            region: project.region.to_string(),
            status: project.status.to_string(),
            length_km: project.length.as_km(),
            stations: project.stations,
            investment: project.investment.raw.to_string(),
            investment_amount: project.investment.amount.as_ref().map(|money| MoneyDto {
                currency: money.currency.code().to_string(),
                magnitude: money.magnitude,
            }),
            from_station: project.from_station.as_deref().map(str::to_string),
            to_station: project.to_station.as_deref().map(str::to_string),
            line_number: project.line_number,
            year: project.opening.map(|opening| opening.year()),
            operational_year,
            completion_year,
            line_color: project.line_color.as_deref().map(str::to_string),
            description: project.description.to_string(),
        }
    }
}
