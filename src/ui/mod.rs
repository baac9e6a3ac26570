pub mod bindings;
mod charts_view;
pub mod config;

use std::collections::HashMap;
use std::sync::Arc;

use egui::{Color32, RichText, Visuals, style::Widgets};
use log::error;

use crate::chart::ChartSpec;
use crate::records::{RecordStore, SiteOption, build_site_options};
use self::bindings::{BindingRegistry, ChartId, ControlId, SelectionState};
use self::config::AppConfig;

const PALETTE_BACKGROUND: Color32 = Color32::from_rgb(17, 17, 17);
const PALETTE_HEADING: Color32 = Color32::from_rgb(80, 61, 54);

const PAYLOAD_STEP_KG: f64 = 1000.;

/// `DashboardApp` hosts the launch records dashboard: a site dropdown, a
/// payload range control, and the two charts. All chart data is recomputed
/// through the binding registry whenever a control changes; the record store
/// itself is immutable for the lifetime of the process.
pub struct DashboardApp {
    store: Arc<RecordStore>,
    site_options: Vec<SiteOption>,
    selection: SelectionState,
    registry: BindingRegistry,
    charts: HashMap<ChartId, ChartSpec>,
    app_config: AppConfig,
}

impl DashboardApp {
    pub fn new(
        store: Arc<RecordStore>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            panel_fill: PALETTE_BACKGROUND,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let site_options = build_site_options(store.distinct_sites());
        let selection = SelectionState::full_range(&store);
        let registry = BindingRegistry::dashboard();
        let charts = registry
            .refresh_all(&store, &selection)
            .into_iter()
            .collect();

        Self {
            store,
            site_options,
            selection,
            registry,
            charts,
            app_config,
        }
    }

    fn show_site_dropdown(&mut self, ui: &mut egui::Ui, changed: &mut Vec<ControlId>) {
        let previous_site = self.selection.selected_site.clone();

        let selected_label = self
            .site_options
            .iter()
            .find(|option| option.value == self.selection.selected_site)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| self.selection.selected_site.clone());

        ui.horizontal(|ui| {
            ui.label("Launch Site:");
            egui::ComboBox::from_id_salt("site-dropdown")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for option in &self.site_options {
                        ui.selectable_value(
                            &mut self.selection.selected_site,
                            option.value.clone(),
                            option.label.as_str(),
                        );
                    }
                });
        });

        if previous_site != self.selection.selected_site {
            changed.push(ControlId::SiteDropdown);
        }
    }

    fn show_payload_slider(&mut self, ui: &mut egui::Ui, changed: &mut Vec<ControlId>) {
        let previous_range = self.selection.payload_range;

        // Slider bounds come from the full dataset and never move, even as
        // the displayed subset shrinks.
        let min = self.store.min_payload();
        let max = self.store.max_payload();

        ui.label("Payload range (Kg):");
        ui.add(
            egui::Slider::new(&mut self.selection.payload_range.low, min..=max)
                .step_by(PAYLOAD_STEP_KG)
                .text("Min"),
        );
        ui.add(
            egui::Slider::new(&mut self.selection.payload_range.high, min..=max)
                .step_by(PAYLOAD_STEP_KG)
                .text("Max"),
        );

        if previous_range != self.selection.payload_range {
            changed.push(ControlId::PayloadSlider);
        }
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.window_position = outer_rect.min.into();
            self.app_config.window_width = outer_rect.width();
            self.app_config.window_height = outer_rect.height();
        }

        let mut changed: Vec<ControlId> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("SpaceX Launch Records Dashboard")
                        .color(PALETTE_HEADING)
                        .size(32.),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_site_dropdown(ui, &mut changed);
                ui.separator();

                if let Some(ChartSpec::Pie(spec)) = self.charts.get(&ChartId::SuccessPie) {
                    charts_view::show_pie(ui, spec);
                }
                ui.separator();

                self.show_payload_slider(ui, &mut changed);
                ui.separator();

                if let Some(ChartSpec::Scatter(spec)) = self.charts.get(&ChartId::PayloadScatter) {
                    charts_view::show_scatter(ui, spec);
                }
            });
        });

        if !changed.is_empty() {
            for (chart, spec) in self.registry.refresh(&self.store, &self.selection, &changed) {
                self.charts.insert(chart, spec);
            }
        }
    }
}
