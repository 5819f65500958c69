// Periods — the (year, month) units the study is sliced into.
//
// Every topic model run covers one calendar month. The studied range is
// explicit configuration passed into each component; nothing here is
// module-level state.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// One (year, month) unit of analysis with its own topic model run.
///
/// Ordered by (year, month), which for the zero-padded `YYYY_MM` rendering
/// coincides with lexicographic order on the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    /// The `YYYY_MM` identifier used in folder names and graph node ids.
    pub fn identifier(&self) -> String {
        format!("{}_{:02}", self.year, self.month)
    }

    /// The `MM/YYYY` label used for presence-table columns.
    pub fn column_label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .split_once('_')
            .ok_or_else(|| anyhow!("invalid period identifier: {s:?}"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| anyhow!("invalid year in period identifier: {s:?}"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| anyhow!("invalid month in period identifier: {s:?}"))?;
        if !(1..=12).contains(&month) {
            return Err(anyhow!("month out of range in period identifier: {s:?}"));
        }
        Ok(Self { year, month })
    }
}

/// The studied span: an inclusive run of whole years, every month covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start_year: i32,
    pub end_year: i32,
}

impl PeriodRange {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self> {
        if start_year > end_year {
            return Err(anyhow!(
                "invalid period range: start year {start_year} is after end year {end_year}"
            ));
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// Every period in the range, in calendar order.
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        (self.start_year..=self.end_year)
            .flat_map(|year| (1..=12).map(move |month| Period::new(year, month)))
    }

    /// Number of periods (= presence-table columns) in the range.
    pub fn len(&self) -> usize {
        ((self.end_year - self.start_year + 1) as usize) * 12
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, period: Period) -> bool {
        (self.start_year..=self.end_year).contains(&period.year)
    }

    /// All ordered pairs (p1, p2) with p1 <= p2 in calendar order, including
    /// p1 == p2 (a month compared against itself is the sanity baseline).
    pub fn ordered_pairs(&self) -> Vec<(Period, Period)> {
        let periods: Vec<Period> = self.periods().collect();
        let mut pairs = Vec::with_capacity(periods.len() * (periods.len() + 1) / 2);
        for (i, &p1) in periods.iter().enumerate() {
            for &p2 in &periods[i..] {
                pairs.push((p1, p2));
            }
        }
        pairs
    }

    /// Zero-based presence-table column for `period`, left to right in
    /// calendar order. None when the period falls outside the range.
    pub fn column_index(&self, period: Period) -> Option<usize> {
        if !self.contains(period) {
            return None;
        }
        let years_in = (period.year - self.start_year) as usize;
        Some(years_in * 12 + (period.month as usize - 1))
    }

    /// The `MM/YYYY` column labels for the presence-table header.
    pub fn column_labels(&self) -> Vec<String> {
        self.periods().map(|p| p.column_label()).collect()
    }
}
