//! Displays turn a finished [`ChartHandle`] into output.

use crate::error::{ChartError, ChartResult};
use crate::format::format_sci;
use crate::handle::{ChartHandle, CurveKind, MarkerShape};
use std::io::Write;

/// A blocking sink for finished charts (window, terminal, test recorder).
pub trait ChartDisplay {
    fn show(&mut self, chart: &ChartHandle) -> ChartResult<()>;
}

/// Keeps every chart it is shown. Used to inspect output without a screen.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<ChartHandle>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ChartHandle> {
        self.shown.last()
    }
}

impl ChartDisplay for RecordingDisplay {
    fn show(&mut self, chart: &ChartHandle) -> ChartResult<()> {
        self.shown.push(chart.clone());
        Ok(())
    }
}

/// Writes a plain-text description of the chart, for headless sessions.
pub struct SummaryDisplay<W: Write> {
    out: W,
}

impl<W: Write> SummaryDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartDisplay for SummaryDisplay<W> {
    fn show(&mut self, chart: &ChartHandle) -> ChartResult<()> {
        write_summary(&mut self.out, chart).map_err(|e| ChartError::Display {
            message: e.to_string(),
        })
    }
}

fn write_summary<W: Write>(out: &mut W, chart: &ChartHandle) -> std::io::Result<()> {
    let turbulent = chart.turbulent_curves().count();
    let laminar = chart
        .curves()
        .iter()
        .filter(|c| c.kind == CurveKind::Laminar)
        .count();
    let transitional = chart
        .curves()
        .iter()
        .filter(|c| c.kind == CurveKind::Transitional)
        .count();

    writeln!(
        out,
        "{}: [{}, {}]  {}: [{}, {}]",
        chart.x_axis.label,
        format_sci(chart.x_axis.min, 1),
        format_sci(chart.x_axis.max, 1),
        chart.y_axis.label,
        chart.y_axis.min,
        chart.y_axis.max,
    )?;
    writeln!(
        out,
        "curves: {laminar} laminar, {transitional} transitional, {turbulent} turbulent"
    )?;

    if let Some(legend) = chart.legend() {
        if let Some(title) = &legend.title {
            writeln!(out, "{title}")?;
        }
    }
    for (i, marker) in chart.markers().iter().enumerate() {
        let shape = match marker.style.shape {
            MarkerShape::Circle => "o",
            MarkerShape::TriangleUp => "^",
        };
        writeln!(
            out,
            "{:>3} {shape} f={:.6} {}",
            i + 1,
            marker.y,
            marker.label.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}
