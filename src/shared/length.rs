use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Track length in kilometers.
///
/// Sums are kept unrounded, rounding only happens when the value is
/// displayed or explicitly requested through [`Length::rounded_km`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Length(f64);

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Length {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Length::ZERO, |acc, length| acc + length)
    }
}

impl<'a> Sum<&'a Length> for Length {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.2} km", self.0))
    }
}

impl Length {
    pub const ZERO: Length = Length(0.0);

    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn as_km(&self) -> f64 {
        self.0
    }

    /// Kilometers rounded to two decimals.
    pub fn rounded_km(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

#[test]
fn length_eq_test() {
    assert_eq!(Length::from_km(1.0) + Length::from_km(0.5), Length::from_km(1.5));
}

#[test]
fn length_display_test() {
    assert_eq!(Length::from_km(12.0).to_string(), "12.00 km");
    assert_eq!(Length::from_km(19.143).to_string(), "19.14 km");
}

#[test]
fn length_sum_test() {
    let total: Length = [26.46, 49.06, 37.42]
        .into_iter()
        .map(Length::from_km)
        .sum();
    assert_eq!(total.rounded_km(), 112.94);
}
