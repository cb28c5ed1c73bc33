//! Moody diagram: friction factor against Reynolds number for a family of
//! relative roughness values, with user operating points on top.

use crate::display::ChartDisplay;
use crate::error::ChartResult;
use crate::format::{TickFormat, format_sci};
use crate::handle::{
    Annotation, Axis, ChartHandle, Color, Curve, CurveKind, GridStyle, Legend, LegendLocation,
    LineStyle, Marker, MarkerShape, MarkerStyle, TickDirection, TickStyle,
};
use mf_core::logspace;
use mf_friction::{FlowSample, FrictionEngine, Regime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relative roughness values drawn as turbulent curves.
pub const ROUGHNESS_FAMILY: [f64; 20] = [
    0.0, 1e-6, 5e-6, 1e-5, 5e-5, 1e-4, 2e-4, 4e-4, 6e-4, 8e-4, 1e-3, 2e-3, 4e-3, 6e-3, 8e-3,
    1.5e-2, 2e-2, 3e-2, 4e-2, 5e-2,
];

pub const LEGEND_TITLE: &str = "Re, rr - First to Last";

/// Log-spaced Reynolds number grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReRange {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl ReRange {
    pub fn values(&self) -> ChartResult<Vec<f64>> {
        Ok(logspace(self.start, self.stop, self.points)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodyChartConfig {
    pub laminar: ReRange,
    pub transitional: ReRange,
    pub turbulent: ReRange,
    pub relative_roughness: Vec<f64>,
    pub x_limits: [f64; 2],
    pub y_limits: [f64; 2],
    /// Width and height in inches
    pub figure_size: [f32; 2],
    /// Data position of the rotated roughness label beside the plot
    pub roughness_label_at: [f64; 2],
}

impl Default for MoodyChartConfig {
    fn default() -> Self {
        Self {
            laminar: ReRange {
                start: 600.0,
                stop: 2000.0,
                points: 20,
            },
            transitional: ReRange {
                start: 2000.0,
                stop: 4000.0,
                points: 50,
            },
            turbulent: ReRange {
                start: 4000.0,
                stop: 1e8,
                points: 100,
            },
            relative_roughness: ROUGHNESS_FAMILY.to_vec(),
            x_limits: [600.0, 1e8],
            y_limits: [0.008, 0.10],
            figure_size: [10.0, 8.0],
            roughness_label_at: [2.5e8, 0.02],
        }
    }
}

/// Precomputed `(Re, f)` pairs for one relative roughness.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughnessCurve {
    pub relative_roughness: f64,
    pub points: Vec<[f64; 2]>,
}

/// Draws Moody diagrams with a friction factor engine.
#[derive(Debug, Clone, Default)]
pub struct MoodyChartRenderer {
    engine: FrictionEngine,
    config: MoodyChartConfig,
}

impl MoodyChartRenderer {
    pub fn new(engine: FrictionEngine, config: MoodyChartConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &MoodyChartConfig {
        &self.config
    }

    /// A fresh chart holding only the background diagram.
    pub fn render_base_diagram(&self) -> ChartResult<ChartHandle> {
        let mut chart = ChartHandle::default();
        self.draw_base(&mut chart)?;
        Ok(chart)
    }

    /// Clear `chart` and draw the background diagram into it.
    ///
    /// The laminar and transitional curves both use `f = 64/Re`. Past
    /// Re = 2000 that is an illustrative extension, drawn dashed, and is
    /// unrelated to the random transitional value an operating point gets.
    pub fn draw_base(&self, chart: &mut ChartHandle) -> ChartResult<()> {
        let cfg = &self.config;
        chart.clear();
        self.configure_axes(chart);

        let laminar = self.laminar_points(&cfg.laminar)?;
        chart.add_curve(Curve {
            kind: CurveKind::Laminar,
            style: LineStyle::solid(Color::BLUE),
            points: laminar,
        });

        let transitional = self.laminar_points(&cfg.transitional)?;
        chart.add_curve(Curve {
            kind: CurveKind::Transitional,
            style: LineStyle::dashed(Color::BLUE),
            points: transitional,
        });

        for curve in self.roughness_curves()? {
            if let Some(&[x, y]) = curve.points.last() {
                chart.annotate(Annotation {
                    x,
                    y,
                    text: format_sci(curve.relative_roughness, 2),
                    rotation_deg: 0.0,
                    font_size: 10.0,
                });
            }
            chart.add_curve(Curve {
                kind: CurveKind::Turbulent {
                    relative_roughness: curve.relative_roughness,
                },
                style: LineStyle::solid(Color::BLACK),
                points: curve.points,
            });
        }

        let [label_x, label_y] = cfg.roughness_label_at;
        chart.annotate(Annotation {
            x: label_x,
            y: label_y,
            text: "Relative roughness ε/d".to_string(),
            rotation_deg: 90.0,
            font_size: 16.0,
        });

        debug!(
            curves = chart.curves().len(),
            annotations = chart.annotations().len(),
            "Moody base diagram drawn"
        );
        Ok(())
    }

    /// One Colebrook curve per configured roughness over the turbulent grid.
    pub fn roughness_curves(&self) -> ChartResult<Vec<RoughnessCurve>> {
        let reynolds = self.config.turbulent.values()?;
        self.config
            .relative_roughness
            .iter()
            .map(|&rr| -> ChartResult<RoughnessCurve> {
                let points = reynolds
                    .iter()
                    .map(|&re| -> ChartResult<[f64; 2]> {
                        let f = self.engine.friction_factor(re, rr, Regime::Turbulent)?;
                        Ok([re, f])
                    })
                    .collect::<ChartResult<Vec<_>>>()?;
                Ok(RoughnessCurve {
                    relative_roughness: rr,
                    points,
                })
            })
            .collect()
    }

    /// Redraw the base diagram, mark every sample in order, add the legend
    /// and hand the chart to `display`.
    pub fn overlay_all_points(
        &self,
        chart: &mut ChartHandle,
        samples: &[FlowSample],
        display: &mut dyn ChartDisplay,
    ) -> ChartResult<()> {
        self.draw_base(chart)?;

        for sample in samples {
            let shape = if sample.regime() == Regime::Transitional {
                MarkerShape::TriangleUp
            } else {
                MarkerShape::Circle
            };
            let label = format!(
                "Re={}, rr={}",
                format_sci(sample.reynolds(), 2),
                format_sci(sample.relative_roughness(), 2)
            );
            overlay_point(
                chart,
                sample.reynolds(),
                sample.friction_factor(),
                MarkerStyle::hollow(shape),
                Some(label),
            )?;
        }

        chart.set_legend(Legend {
            title: Some(LEGEND_TITLE.to_string()),
            location: LegendLocation::Best,
        });
        debug!(points = samples.len(), "displaying Moody chart");
        display.show(chart)
    }

    fn configure_axes(&self, chart: &mut ChartHandle) {
        let cfg = &self.config;
        chart.figure_size = cfg.figure_size;
        chart.x_axis = Axis::log("Reynolds number Re", cfg.x_limits[0], cfg.x_limits[1]);
        chart.y_axis = Axis {
            minor_format: Some(TickFormat::Fixed(3)),
            ..Axis::log("Friction factor f", cfg.y_limits[0], cfg.y_limits[1])
        };
        chart.ticks = TickStyle {
            direction: TickDirection::In,
            mirrored: true,
            label_size: 12.0,
        };
        chart.grid = GridStyle {
            major: true,
            minor: true,
            line_width: 1.0,
            alpha: 0.5,
        };
    }

    fn laminar_points(&self, range: &ReRange) -> ChartResult<Vec<[f64; 2]>> {
        range
            .values()?
            .into_iter()
            .map(|re| -> ChartResult<[f64; 2]> {
                Ok([re, self.engine.friction_factor(re, 0.0, Regime::Laminar)?])
            })
            .collect()
    }
}

/// Add one marker at `(re, f)`; the base diagram is left as it is.
pub fn overlay_point(
    chart: &mut ChartHandle,
    re: f64,
    f: f64,
    style: MarkerStyle,
    label: Option<String>,
) -> ChartResult<()> {
    chart.add_marker(Marker {
        x: re,
        y: f,
        style,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_diagram() {
        let cfg = MoodyChartConfig::default();
        assert_eq!(cfg.relative_roughness.len(), 20);
        assert_eq!(cfg.relative_roughness[0], 0.0);
        assert_eq!(cfg.relative_roughness[19], 0.05);
        assert_eq!(cfg.turbulent.points, 100);
        assert_eq!(cfg.laminar.points, 20);
        assert_eq!(cfg.transitional.points, 50);
    }

    #[test]
    fn overlay_point_leaves_background_alone() {
        let renderer = MoodyChartRenderer::default();
        let mut chart = renderer.render_base_diagram().unwrap();
        let curves_before = chart.curves().len();

        overlay_point(
            &mut chart,
            5e4,
            0.025,
            MarkerStyle::hollow(MarkerShape::Circle),
            None,
        )
        .unwrap();

        assert_eq!(chart.curves().len(), curves_before);
        assert_eq!(chart.markers().len(), 1);
        assert!(chart.legend().is_none());
    }

    #[test]
    fn annotation_sits_at_curve_end() {
        let renderer = MoodyChartRenderer::default();
        let chart = renderer.render_base_diagram().unwrap();
        let last_curve = chart.turbulent_curves().last().unwrap();
        let end = *last_curve.points.last().unwrap();

        let note = chart
            .annotations()
            .iter()
            .find(|a| a.text == "5.00e-02")
            .unwrap();
        assert_eq!([note.x, note.y], end);
        assert_eq!(note.x, 1e8);
    }
}
