//! Reactive binding layer: an explicit registry mapping input controls to
//! chart handlers. When a control's value changes, every binding that lists
//! it as an input re-runs its handler and the resulting spec replaces the
//! displayed chart.

use crate::aggregate::{PayloadRange, aggregate_successes, filter_by_payload_and_site};
use crate::chart::{self, ChartSpec};
use crate::records::{ALL_SITES, RecordStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartId {
    SuccessPie,
    PayloadScatter,
}

/// Current UI selections. Owned by the UI layer, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub selected_site: String,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// Initial state: all sites, full payload range.
    pub fn full_range(store: &RecordStore) -> Self {
        Self {
            selected_site: ALL_SITES.to_string(),
            payload_range: PayloadRange::new(store.min_payload(), store.max_payload()),
        }
    }
}

pub type ChartHandler = fn(&RecordStore, &SelectionState) -> ChartSpec;

pub struct Binding {
    pub chart: ChartId,
    pub inputs: &'static [ControlId],
    pub handler: ChartHandler,
}

pub struct BindingRegistry {
    bindings: Vec<Binding>,
}

impl BindingRegistry {
    /// The two dashboard bindings: the pie chart reacts to the site dropdown
    /// only, the scatter chart to both the dropdown and the payload slider.
    pub fn dashboard() -> Self {
        Self {
            bindings: vec![
                Binding {
                    chart: ChartId::SuccessPie,
                    inputs: &[ControlId::SiteDropdown],
                    handler: success_pie_handler,
                },
                Binding {
                    chart: ChartId::PayloadScatter,
                    inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
                    handler: payload_scatter_handler,
                },
            ],
        }
    }

    /// Re-runs the handlers of every binding that depends on one of the
    /// changed controls, returning the fresh chart specs.
    pub fn refresh(
        &self,
        store: &RecordStore,
        state: &SelectionState,
        changed: &[ControlId],
    ) -> Vec<(ChartId, ChartSpec)> {
        self.bindings
            .iter()
            .filter(|binding| binding.inputs.iter().any(|input| changed.contains(input)))
            .map(|binding| (binding.chart, (binding.handler)(store, state)))
            .collect()
    }

    /// Computes every chart. Used once at startup to populate the dashboard.
    pub fn refresh_all(
        &self,
        store: &RecordStore,
        state: &SelectionState,
    ) -> Vec<(ChartId, ChartSpec)> {
        self.bindings
            .iter()
            .map(|binding| (binding.chart, (binding.handler)(store, state)))
            .collect()
    }
}

fn success_pie_handler(store: &RecordStore, state: &SelectionState) -> ChartSpec {
    let breakdown = aggregate_successes(store.records(), &state.selected_site);
    ChartSpec::Pie(chart::success_pie(&breakdown, &state.selected_site))
}

fn payload_scatter_handler(store: &RecordStore, state: &SelectionState) -> ChartSpec {
    let rows = filter_by_payload_and_site(
        store.records(),
        state.payload_range,
        &state.selected_site,
    );
    ChartSpec::Scatter(chart::payload_scatter(&rows, &state.selected_site))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{LaunchRecord, Outcome};

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            LaunchRecord {
                site: "siteA".to_string(),
                payload_mass_kg: 500.,
                booster_category: "v1.0".to_string(),
                outcome: Outcome::Success,
            },
            LaunchRecord {
                site: "siteB".to_string(),
                payload_mass_kg: 5000.,
                booster_category: "v1.1".to_string(),
                outcome: Outcome::Failure,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_slider_change_refreshes_scatter_only() {
        let store = store();
        let state = SelectionState::full_range(&store);
        let registry = BindingRegistry::dashboard();

        let refreshed = registry.refresh(&store, &state, &[ControlId::PayloadSlider]);
        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].0, ChartId::PayloadScatter);
        assert!(matches!(refreshed[0].1, ChartSpec::Scatter(_)));
    }

    #[test]
    fn test_dropdown_change_refreshes_both_charts() {
        let store = store();
        let mut state = SelectionState::full_range(&store);
        state.selected_site = "siteA".to_string();
        let registry = BindingRegistry::dashboard();

        let refreshed = registry.refresh(&store, &state, &[ControlId::SiteDropdown]);
        assert_eq!(refreshed.len(), 2);
        assert_eq!(refreshed[0].0, ChartId::SuccessPie);
        assert_eq!(refreshed[1].0, ChartId::PayloadScatter);
    }

    #[test]
    fn test_no_change_refreshes_nothing() {
        let store = store();
        let state = SelectionState::full_range(&store);
        let registry = BindingRegistry::dashboard();

        assert!(registry.refresh(&store, &state, &[]).is_empty());
    }

    #[test]
    fn test_refresh_all_covers_every_chart() {
        let store = store();
        let state = SelectionState::full_range(&store);
        let registry = BindingRegistry::dashboard();

        let all = registry.refresh_all(&store, &state);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_initial_state_spans_full_payload_range() {
        let store = store();
        let state = SelectionState::full_range(&store);

        assert_eq!(state.selected_site, ALL_SITES);
        assert_eq!(state.payload_range, PayloadRange::new(500., 5000.));
    }
}
