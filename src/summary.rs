use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    repository::{Project, Status},
    shared::{Currency, Length, Money},
};

/// Investment total of one currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CurrencyTotal {
    /// Billions of the currency unit.
    pub total: f64,
    pub count: usize,
}

impl CurrencyTotal {
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total / self.count as f64)
        }
    }
}

/// Investment figures, kept apart per currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvestmentSummary {
    pub by_currency: BTreeMap<Currency, CurrencyTotal>,
    /// Projects whose investment text holds no number.
    pub unparseable: usize,
}

impl InvestmentSummary {
    pub fn is_mixed(&self) -> bool {
        self.by_currency.len() > 1
    }

    /// The total when every parsed amount shares one currency.
    /// `None` for mixed currencies, which are never added together.
    pub fn single_currency(&self) -> Option<(&Currency, &CurrencyTotal)> {
        if self.by_currency.len() == 1 {
            self.by_currency.iter().next()
        } else {
            None
        }
    }

    pub fn display_total(&self) -> String {
        self.display_with(|total| Some(total.total))
    }

    pub fn display_average(&self) -> String {
        self.display_with(CurrencyTotal::average)
    }

    fn display_with(&self, value: impl Fn(&CurrencyTotal) -> Option<f64>) -> String {
        if self.is_mixed() {
            return "mixed".into();
        }
        self.single_currency()
            .and_then(|(currency, total)| {
                value(total).map(|magnitude| Money::new(currency.clone(), magnitude).to_string())
            })
            .unwrap_or_else(|| "n/a".into())
    }

    fn add(&mut self, project: &Project) {
        match &project.investment.amount {
            Some(money) => {
                let total = self.by_currency.entry(money.currency.clone()).or_default();
                total.total += money.magnitude;
                total.count += 1;
            }
            None => self.unparseable += 1,
        }
    }
}

/// Dashboard KPIs over a set of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    pub by_status: BTreeMap<Status, usize>,
    /// Unrounded, see [`Summary::total_length_display`].
    pub total_length: Length,
    /// Sum over the projects that report a station count.
    pub total_stations: u64,
    pub stations_reported: usize,
    pub investment: InvestmentSummary,
}

impl Summary {
    pub fn count(&self, status: &Status) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }

    pub fn operational_count(&self) -> usize {
        self.count(&Status::Operational)
    }

    pub fn total_length_display(&self) -> String {
        self.total_length.to_string()
    }
}

/// Computes the summary of `projects`. Order of the input does not matter
/// and an empty input gives an all-zero summary.
pub fn compute_summary<'a, I>(projects: I) -> Summary
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .fold(Summary::default(), |mut summary, project| {
            summary.total_count += 1;
            *summary.by_status.entry(project.status.clone()).or_default() += 1;
            summary.total_length += project.length;
            if let Some(stations) = project.stations {
                summary.total_stations += u64::from(stations);
                summary.stations_reported += 1;
            }
            summary.investment.add(project);
            summary
        })
}
