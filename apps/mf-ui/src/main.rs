#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mf_chart::{ChartDisplay, ChartResult, MoodyChartRenderer};
use mf_ui::EguiDisplay;

/// Opens a blank Moody diagram.
fn main() -> ChartResult<()> {
    tracing_subscriber::fmt::init();

    let chart = MoodyChartRenderer::default().render_base_diagram()?;
    EguiDisplay::default().show(&chart)
}
