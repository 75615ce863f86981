//! # metrodash
//!
//! Loads metro-rail project datasets, normalizes them into a single record
//! shape and derives the numbers a dashboard shows: counts per status, total
//! network length, station totals and currency-aware investment figures.
//!
//! ```
//! use metrodash::prelude::*;
//!
//! let data = LoadedData::load(&FeedReader::new().from_source(Source::Embedded)).unwrap();
//! let criteria = FilterCriteria::new().with_region("India").with_search("delhi");
//! let delhi = data.projects.filter(&criteria);
//! let summary = compute_summary(delhi.iter().copied());
//! assert_eq!(summary.total_count, delhi.len());
//! ```

pub mod dashboard;
pub mod feed;
pub mod filter;
pub mod repository;
pub mod shared;
pub mod snapshot;
pub mod summary;

pub mod prelude {
    pub use crate::dashboard::{Dashboard, DashboardView, SummaryScope};
    pub use crate::feed::{self, Error, FeedReader, Source};
    pub use crate::filter::{FilterCriteria, Matcher, filter_projects};
    pub use crate::repository::*;
    pub use crate::shared::{Currency, Investment, Length, Money};
    pub use crate::snapshot::{Observer, Outcome, SnapshotStore, StoreStatus, Ticket};
    pub use crate::summary::{CurrencyTotal, InvestmentSummary, Summary, compute_summary};
}
