//! egui window for Moody charts.
//!
//! egui_plot has no logarithmic axes, so everything is plotted against
//! `log10` of the data and the tick formatters map marks back.

use egui::{Color32, RichText};
use egui_plot::{
    AxisHints, Corner, GridMark, HPlacement, Legend, Line, LineStyle as PlotLineStyle,
    MarkerShape as PlotMarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text,
};
use mf_chart::{
    Axis, ChartDisplay, ChartError, ChartHandle, ChartResult, Color, Dash, LegendLocation,
    MarkerShape, Scale, TickFormat, format_sci,
};
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Pixels per inch of the chart's nominal figure size.
const DPI: f32 = 100.0;

/// Shows each chart in its own native window and blocks until it is closed.
///
/// winit allows one event loop per process on some platforms, so a
/// program should show at most one chart through this display.
#[derive(Debug, Clone)]
pub struct EguiDisplay {
    pub title: String,
}

impl Default for EguiDisplay {
    fn default() -> Self {
        Self {
            title: "Moody Diagram".to_string(),
        }
    }
}

impl ChartDisplay for EguiDisplay {
    fn show(&mut self, chart: &ChartHandle) -> ChartResult<()> {
        let [w, h] = chart.figure_size;
        let size = if w > 0.0 && h > 0.0 {
            [w * DPI, h * DPI]
        } else {
            [1000.0, 800.0]
        };
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(size)
                .with_title(self.title.clone()),
            ..Default::default()
        };

        info!(markers = chart.markers().len(), "opening chart window");
        let app = MoodyApp::new(chart.clone());
        eframe::run_native(&self.title, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| ChartError::Display {
                message: e.to_string(),
            })
    }
}

/// eframe app drawing one fixed chart.
pub struct MoodyApp {
    chart: ChartHandle,
}

impl MoodyApp {
    pub fn new(chart: ChartHandle) -> Self {
        Self { chart }
    }
}

impl eframe::App for MoodyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = self.chart.legend().and_then(|l| l.title.as_deref()) {
                ui.label(RichText::new(title).strong());
            }
            plot_chart(ui, &self.chart);
        });
    }
}

/// Draw `chart` into `ui` with egui_plot.
pub fn plot_chart(ui: &mut egui::Ui, chart: &ChartHandle) {
    let x_axis = chart.x_axis.clone();
    let y_axis = chart.y_axis.clone();

    let mut y_axes = vec![
        AxisHints::new_y()
            .label(RichText::new(&y_axis.label).size(y_axis.label_size))
            .formatter(tick_formatter(y_axis.clone())),
    ];
    if let Some(side) = chart.annotations().iter().find(|a| a.rotation_deg != 0.0) {
        y_axes.push(
            AxisHints::new_y()
                .label(RichText::new(&side.text).size(side.font_size))
                .formatter(|_, _| String::new())
                .placement(HPlacement::Right),
        );
    }

    let mut plot = Plot::new("moody_chart")
        .x_axis_label(RichText::new(&x_axis.label).size(x_axis.label_size))
        .x_axis_formatter(tick_formatter(x_axis.clone()))
        .custom_y_axes(y_axes)
        .show_grid(chart.grid.major || chart.grid.minor)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false);
    if let Some(legend) = chart.legend() {
        plot = plot.legend(Legend::default().position(legend_corner(legend.location)));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [to_plot(x_axis.min, x_axis.scale), to_plot(y_axis.min, y_axis.scale)],
            [to_plot(x_axis.max, x_axis.scale), to_plot(y_axis.max, y_axis.scale)],
        ));

        for curve in chart.curves() {
            let points: Vec<[f64; 2]> = curve
                .points
                .iter()
                .map(|&[x, y]| [to_plot(x, x_axis.scale), to_plot(y, y_axis.scale)])
                .collect();
            let style = match curve.style.dash {
                Dash::Solid => PlotLineStyle::Solid,
                Dash::Dashed => PlotLineStyle::dashed_loose(),
            };
            plot_ui.line(
                Line::new(PlotPoints::new(points))
                    .color(color32(curve.style.color))
                    .width(curve.style.width)
                    .style(style),
            );
        }

        for note in chart.annotations().iter().filter(|a| a.rotation_deg == 0.0) {
            let at = PlotPoint::new(to_plot(note.x, x_axis.scale), to_plot(note.y, y_axis.scale));
            plot_ui.text(
                Text::new(at, RichText::new(&note.text).size(note.font_size))
                    .anchor(egui::Align2::RIGHT_BOTTOM),
            );
        }

        for marker in chart.markers() {
            let at = [
                to_plot(marker.x, x_axis.scale),
                to_plot(marker.y, y_axis.scale),
            ];
            let mut points = Points::new(vec![at])
                .shape(marker_shape(marker.style.shape))
                .radius(marker.style.size / 2.0)
                .filled(marker.style.face_color.is_some())
                .color(color32(marker.style.edge_color));
            if let Some(label) = &marker.label {
                points = points.name(label);
            }
            plot_ui.points(points);
        }
    });
    debug!(curves = chart.curves().len(), "chart frame drawn");
}

/// Data value to plot coordinate.
pub fn to_plot(value: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Linear => value,
        Scale::Log => value.log10(),
    }
}

/// Plot coordinate back to data value.
pub fn from_plot(value: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Linear => value,
        Scale::Log => 10f64.powf(value),
    }
}

/// Label for a tick at plot coordinate `value`. Log axes label whole
/// decades with the major format and everything else with the minor
/// format, if the axis has one.
pub fn tick_label(axis: &Axis, value: f64) -> String {
    let data = from_plot(value, axis.scale);
    let on_decade = (value - value.round()).abs() < 1e-9;
    match (axis.scale, on_decade, axis.minor_format) {
        (Scale::Linear, _, _) | (Scale::Log, true, _) => match axis.major_format {
            TickFormat::Auto if axis.scale == Scale::Log => format_sci(data, 0),
            format => format.apply(data),
        },
        (Scale::Log, false, Some(minor)) => minor.apply(data),
        (Scale::Log, false, None) => String::new(),
    }
}

fn tick_formatter(axis: Axis) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark, _range| tick_label(&axis, mark.value)
}

fn legend_corner(location: LegendLocation) -> Corner {
    match location {
        // the region under the laminar line is empty on a Moody chart
        LegendLocation::Best => Corner::LeftBottom,
        LegendLocation::TopRight => Corner::RightTop,
    }
}

fn marker_shape(shape: MarkerShape) -> PlotMarkerShape {
    match shape {
        MarkerShape::Circle => PlotMarkerShape::Circle,
        MarkerShape::TriangleUp => PlotMarkerShape::Up,
    }
}

fn color32(c: Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}
