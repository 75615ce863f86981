use metrodash::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyTotalDto {
    pub total: f64,
    pub count: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentDto {
    pub by_currency: BTreeMap<String, CurrencyTotalDto>,
    pub mixed: bool,
    pub unparseable: usize,
    /// Display strings, `mixed` when currencies differ.
    pub total: String,
    pub average: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDto {
    pub total_count: usize,
    pub operational_count: usize,
    pub by_status: BTreeMap<String, usize>,
    pub total_length_km: f64,
    pub total_length: String,
    pub total_stations: u64,
    pub stations_reported: usize,
    pub investment: InvestmentDto,
}

impl SummaryDto {
    pub fn from(summary: &Summary) -> Self {
        let by_currency = summary
            .investment
            .by_currency
            .iter()
            .map(|(currency, total)| {
                (
                    currency.code().to_string(),
                    CurrencyTotalDto {
                        total: total.total,
                        count: total.count,
                        average: total.average(),
                    },
                )
            })
            .collect();
        Self {
            total_count: summary.total_count,
            operational_count: summary.operational_count(),
            by_status: summary
                .by_status
                .iter()
                .map(|(status, count)| (status.to_string(), *count))
                .collect(),
            total_length_km: summary.total_length.rounded_km(),
            total_length: summary.total_length_display(),
            total_stations: summary.total_stations,
            stations_reported: summary.stations_reported,
            investment: InvestmentDto {
                by_currency,
                mixed: summary.investment.is_mixed(),
                unparseable: summary.investment.unparseable,
                total: summary.investment.display_total(),
                average: summary.investment.display_average(),
            },
        }
    }
}
