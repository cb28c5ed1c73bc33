//! Renderer-independent chart model.
//!
//! A [`ChartHandle`] is a figure being drawn into incrementally: axes,
//! curves, markers, text annotations and an optional legend. Draw
//! operations mutate the handle; a [`ChartDisplay`](crate::ChartDisplay)
//! turns the finished handle into pixels.

use crate::error::{ChartError, ChartResult};
use crate::format::TickFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dash {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub dash: Dash,
    pub width: f32,
}

impl LineStyle {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            dash: Dash::Solid,
            width: 1.5,
        }
    }

    pub fn dashed(color: Color) -> Self {
        Self {
            dash: Dash::Dashed,
            ..Self::solid(color)
        }
    }
}

/// What a curve on a Moody diagram represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveKind {
    Laminar,
    /// Illustrative laminar extension across 2000 < Re < 4000
    Transitional,
    Turbulent { relative_roughness: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub kind: CurveKind,
    pub style: LineStyle,
    /// `(x, y)` in data coordinates
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Circle,
    TriangleUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub size: f32,
    pub edge_color: Color,
    /// `None` draws a hollow marker
    pub face_color: Option<Color>,
}

impl MarkerStyle {
    /// Hollow red marker of size 10, the style used for operating points.
    pub fn hollow(shape: MarkerShape) -> Self {
        Self {
            shape,
            size: 10.0,
            edge_color: Color::RED,
            face_color: None,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::hollow(MarkerShape::Circle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub style: MarkerStyle,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Counter-clockwise, degrees
    pub rotation_deg: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub scale: Scale,
    pub label_size: f32,
    pub major_format: TickFormat,
    pub minor_format: Option<TickFormat>,
}

impl Axis {
    pub fn log(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            scale: Scale::Log,
            label_size: 16.0,
            major_format: TickFormat::Auto,
            minor_format: None,
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            label: String::new(),
            min: 0.0,
            max: 1.0,
            scale: Scale::Linear,
            label_size: 12.0,
            major_format: TickFormat::Auto,
            minor_format: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub direction: TickDirection,
    /// Mirror ticks on the top and right spines
    pub mirrored: bool,
    pub label_size: f32,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            direction: TickDirection::Out,
            mirrored: false,
            label_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub major: bool,
    pub minor: bool,
    pub line_width: f32,
    pub alpha: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            major: false,
            minor: false,
            line_width: 1.0,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendLocation {
    /// Renderer picks the least crowded corner
    Best,
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Option<String>,
    pub location: LegendLocation,
}

/// A figure under construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartHandle {
    /// Width and height in inches
    pub figure_size: [f32; 2],
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub ticks: TickStyle,
    pub grid: GridStyle,
    curves: Vec<Curve>,
    markers: Vec<Marker>,
    annotations: Vec<Annotation>,
    legend: Option<Legend>,
}

impl ChartHandle {
    pub fn new(figure_size: [f32; 2], x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            figure_size,
            x_axis,
            y_axis,
            ..Default::default()
        }
    }

    /// Drop everything drawn so far, keeping figure and axis settings.
    pub fn clear(&mut self) {
        self.curves.clear();
        self.markers.clear();
        self.annotations.clear();
        self.legend = None;
    }

    pub fn add_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// Add a marker. Log axes cannot place a non-positive coordinate.
    pub fn add_marker(&mut self, marker: Marker) -> ChartResult<()> {
        let drawable = marker.x.is_finite()
            && marker.y.is_finite()
            && (self.x_axis.scale == Scale::Linear || marker.x > 0.0)
            && (self.y_axis.scale == Scale::Linear || marker.y > 0.0);
        if !drawable {
            return Err(ChartError::InvalidPoint {
                x: marker.x,
                y: marker.y,
            });
        }
        self.markers.push(marker);
        Ok(())
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn turbulent_curves(&self) -> impl Iterator<Item = &Curve> {
        self.curves
            .iter()
            .filter(|c| matches!(c.kind, CurveKind::Turbulent { .. }))
    }

    /// Markers that carry a legend entry, in drawing order.
    pub fn legend_entries(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().filter_map(|m| m.label.as_deref())
    }
}
