//! Pure aggregation functions that turn the record store plus the current
//! UI selections into derived tables ready for charting. Both functions are
//! stateless and recompute from the full collection on every call.

use crate::records::{ALL_SITES, LaunchRecord, Outcome};

/// Inclusive payload mass filter bounds, in kilograms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// An inverted range (low > high) matches nothing. The range control
    /// cannot normally produce one, but the filter still has to behave.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteSuccessCount {
    pub site: String,
    pub successes: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeCount {
    pub label: &'static str,
    pub count: usize,
}

/// Derived table behind the success pie chart. The shape depends on the
/// dropdown: one row per site when no site is selected, one row per outcome
/// for a specific site.
#[derive(Clone, Debug, PartialEq)]
pub enum SuccessBreakdown {
    BySite(Vec<SiteSuccessCount>),
    ByOutcome(Vec<OutcomeCount>),
}

impl SuccessBreakdown {
    pub fn is_empty(&self) -> bool {
        match self {
            SuccessBreakdown::BySite(rows) => rows.is_empty(),
            SuccessBreakdown::ByOutcome(rows) => rows.is_empty(),
        }
    }
}

/// Aggregates launch successes for the pie chart.
///
/// With `ALL_SITES` selected the records are filtered to successes first and
/// then grouped by site, so a site with zero successes never gets a row.
/// With a specific site selected the site's launches are counted by outcome
/// and relabeled "Success"/"Failed"; an unknown site yields an empty table,
/// never an error.
pub fn aggregate_successes(records: &[LaunchRecord], selected_site: &str) -> SuccessBreakdown {
    if selected_site == ALL_SITES {
        let mut rows: Vec<SiteSuccessCount> = Vec::new();
        for record in records.iter().filter(|r| r.outcome == Outcome::Success) {
            match rows.iter_mut().find(|row| row.site == record.site) {
                Some(row) => row.successes += 1,
                None => rows.push(SiteSuccessCount {
                    site: record.site.clone(),
                    successes: 1,
                }),
            }
        }
        SuccessBreakdown::BySite(rows)
    } else {
        let mut successes = 0;
        let mut failures = 0;
        for record in records.iter().filter(|r| r.site == selected_site) {
            match record.outcome {
                Outcome::Success => successes += 1,
                Outcome::Failure => failures += 1,
            }
        }

        // Only outcomes that actually occurred get a row, so an unmatched
        // site produces an empty table.
        let mut rows = Vec::new();
        if successes > 0 {
            rows.push(OutcomeCount {
                label: Outcome::Success.label(),
                count: successes,
            });
        }
        if failures > 0 {
            rows.push(OutcomeCount {
                label: Outcome::Failure.label(),
                count: failures,
            });
        }
        SuccessBreakdown::ByOutcome(rows)
    }
}

/// Filters records to the inclusive payload range, and to the selected site
/// unless `ALL_SITES` is chosen. Rows come back unmodified, ready to chart
/// payload (x) against outcome (y) colored by booster category.
pub fn filter_by_payload_and_site<'r>(
    records: &'r [LaunchRecord],
    payload_range: PayloadRange,
    selected_site: &str,
) -> Vec<&'r LaunchRecord> {
    records
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| selected_site == ALL_SITES || r.site == selected_site)
        .collect()
}
