//! Chart adapter: wraps derived tables into renderer-agnostic chart
//! specifications (data series, colors, title). Pure functions of their
//! inputs; the UI layer decides how each spec is drawn.

use egui::Color32;

use crate::aggregate::SuccessBreakdown;
use crate::records::{ALL_SITES, LaunchRecord, Outcome};

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
pub const FAILED_COLOR: Color32 = Color32::from_rgb(218, 54, 51);

// Categorical palette, assigned in first-seen order and cycled if there are
// more categories than colors.
pub const CATEGORY_PALETTE: [Color32; 6] = [
    Color32::from_rgb(99, 110, 250),
    Color32::from_rgb(239, 85, 59),
    Color32::from_rgb(0, 204, 150),
    Color32::from_rgb(171, 99, 250),
    Color32::from_rgb(255, 161, 90),
    Color32::from_rgb(25, 211, 243),
];

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub color: Color32,
    /// [payload mass kg, outcome as 0/1]
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

/// Builds the success pie spec. For the all-sites breakdown each site gets a
/// palette color; for a single site the fixed Success/Failed color map is
/// used. An empty breakdown produces a spec with no slices, which renders as
/// an empty chart.
pub fn success_pie(breakdown: &SuccessBreakdown, selected_site: &str) -> PieSpec {
    match breakdown {
        SuccessBreakdown::BySite(rows) => PieSpec {
            title: "Total Successful Launches by Site".to_string(),
            slices: rows
                .iter()
                .enumerate()
                .map(|(i, row)| PieSlice {
                    label: row.site.clone(),
                    value: row.successes as f64,
                    color: CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()],
                })
                .collect(),
        },
        SuccessBreakdown::ByOutcome(rows) => PieSpec {
            title: format!("Total Success vs. Failed Launches for {selected_site}"),
            slices: rows
                .iter()
                .map(|row| PieSlice {
                    label: row.label.to_string(),
                    value: row.count as f64,
                    color: if row.label == Outcome::Success.label() {
                        SUCCESS_COLOR
                    } else {
                        FAILED_COLOR
                    },
                })
                .collect(),
        },
    }
}

/// Builds the payload-vs-outcome scatter spec, one series per booster
/// version category in first-seen order.
pub fn payload_scatter(rows: &[&LaunchRecord], selected_site: &str) -> ScatterSpec {
    let title = if selected_site == ALL_SITES {
        "Payload vs. Launch Outcome for All Sites".to_string()
    } else {
        format!("Payload vs. Launch Outcome for {selected_site}")
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in rows {
        let y = match record.outcome {
            Outcome::Success => 1.,
            Outcome::Failure => 0.,
        };
        let point = [record.payload_mass_kg, y];
        match series
            .iter_mut()
            .find(|s| s.label == record.booster_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                label: record.booster_category.clone(),
                color: CATEGORY_PALETTE[series.len() % CATEGORY_PALETTE.len()],
                points: vec![point],
            }),
        }
    }

    ScatterSpec {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        series,
    }
}
