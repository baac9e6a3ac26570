// Renders the chart specs produced by the chart adapter. The pie chart is
// drawn directly with the egui painter; the scatter chart goes through
// egui_plot.

use std::f32::consts::TAU;

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, PlotPoints, Points};

use crate::chart::{PieSpec, ScatterSpec};

const CHART_HEIGHT: f32 = 260.;
const PIE_SEGMENTS_PER_TURN: f32 = 72.;

pub(crate) fn show_pie(ui: &mut Ui, spec: &PieSpec) {
    ui.label(RichText::new(&spec.title).color(Color32::WHITE).strong());

    let total: f64 = spec.slices.iter().map(|s| s.value).sum();
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), CHART_HEIGHT), Sense::hover());

    // An empty derived table is valid and renders as an empty chart.
    if total <= 0. {
        return;
    }

    let rect = response.rect;
    let center = rect.center();
    let radius = rect.height().min(rect.width()) * 0.45;

    // Slices start at twelve o'clock and sweep clockwise.
    let mut start_angle = -TAU / 4.;
    for slice in &spec.slices {
        let sweep = TAU * (slice.value / total) as f32;
        let steps = ((sweep / TAU) * PIE_SEGMENTS_PER_TURN).ceil().max(2.) as usize;

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = start_angle + sweep * i as f32 / steps as f32;
            points.push(Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        painter.add(Shape::convex_polygon(points, slice.color, Stroke::NONE));

        start_angle += sweep;
    }

    ui.horizontal_wrapped(|ui| {
        for slice in &spec.slices {
            ui.colored_label(slice.color, format!("{} ({:.0})", slice.label, slice.value));
        }
    });
}

pub(crate) fn show_scatter(ui: &mut Ui, spec: &ScatterSpec) {
    ui.label(RichText::new(&spec.title).color(Color32::WHITE).strong());

    egui_plot::Plot::new("payload-outcome")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .include_y(-0.2)
        .include_y(1.2)
        .x_axis_label(spec.x_label.clone())
        .y_axis_label("class")
        .show(ui, |plot_ui| {
            for series in &spec.series {
                plot_ui.points(
                    Points::new(series.label.clone(), PlotPoints::new(series.points.clone()))
                        .color(series.color)
                        .radius(4.),
                );
            }
        });
}
