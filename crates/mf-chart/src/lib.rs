//! mf-chart: Moody diagram rendering.
//!
//! [`MoodyChartRenderer`] draws the laminar line, the illustrative
//! transitional line and one Colebrook curve per relative roughness into a
//! [`ChartHandle`], then overlays operating points. The handle is a plain
//! data model; any [`ChartDisplay`] (a GUI window, a text summary, a test
//! recorder) can present it.

pub mod display;
pub mod error;
pub mod format;
pub mod handle;
pub mod moody;

pub use display::{ChartDisplay, RecordingDisplay, SummaryDisplay};
pub use error::{ChartError, ChartResult};
pub use format::{TickFormat, format_sci};
pub use handle::{
    Annotation, Axis, ChartHandle, Color, Curve, CurveKind, Dash, GridStyle, Legend,
    LegendLocation, LineStyle, Marker, MarkerShape, MarkerStyle, Scale, TickDirection, TickStyle,
};
pub use moody::{
    LEGEND_TITLE, MoodyChartConfig, MoodyChartRenderer, ROUGHNESS_FAMILY, ReRange,
    RoughnessCurve, overlay_point,
};
