//! Ordered record of the operating points entered in one run.

use crate::error::AppResult;
use crate::pipe::{PipeFlow, PipeInputs, WaterProperties, head_loss_per_foot};
use mf_chart::{ChartDisplay, ChartHandle, MoodyChartRenderer};
use mf_friction::{FlowSample, FrictionEngine};
use rand::Rng;
use tracing::info;

/// One evaluated pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub inputs: PipeInputs,
    pub flow: PipeFlow,
    pub sample: FlowSample,
    /// ft of head per ft of pipe
    pub head_loss_per_foot: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: FrictionEngine,
    water: WaterProperties,
    points: Vec<OperatingPoint>,
}

impl Session {
    pub fn new(engine: FrictionEngine, water: WaterProperties) -> Self {
        Self {
            engine,
            water,
            points: Vec::new(),
        }
    }

    pub fn engine(&self) -> &FrictionEngine {
        &self.engine
    }

    /// Evaluate one pipe and append it. Nothing is recorded on error.
    pub fn evaluate<R>(&mut self, inputs: PipeInputs, rng: &mut R) -> AppResult<&OperatingPoint>
    where
        R: Rng + ?Sized,
    {
        let flow = PipeFlow::from_inputs(&inputs, &self.water)?;
        let sample = FlowSample::evaluate(
            &self.engine,
            flow.reynolds,
            flow.relative_roughness,
            rng,
        )?;
        let head_loss = head_loss_per_foot(
            sample.friction_factor(),
            inputs.diameter,
            flow.velocity(),
            self.water.gravity,
        );

        info!(
            reynolds = flow.reynolds,
            relative_roughness = flow.relative_roughness,
            friction_factor = sample.friction_factor(),
            regime = %sample.regime(),
            "operating point evaluated"
        );

        self.points.push(OperatingPoint {
            inputs,
            flow,
            sample,
            head_loss_per_foot: head_loss,
        });
        Ok(&self.points[self.points.len() - 1])
    }

    pub fn points(&self) -> &[OperatingPoint] {
        &self.points
    }

    /// Samples in the order they were entered.
    pub fn samples(&self) -> Vec<FlowSample> {
        self.points.iter().map(|p| p.sample).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Draw every recorded point on a fresh Moody diagram and show it.
    pub fn show_chart(
        &self,
        renderer: &MoodyChartRenderer,
        display: &mut dyn ChartDisplay,
    ) -> AppResult<ChartHandle> {
        let mut chart = ChartHandle::default();
        renderer.overlay_all_points(&mut chart, &self.samples(), display)?;
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use mf_chart::RecordingDisplay;
    use mf_friction::Regime;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn evaluate_appends_in_order() {
        let mut session = Session::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        session
            .evaluate(PipeInputs::from_field_units(6.0, 600.0, 300.0), &mut rng)
            .unwrap();
        session
            .evaluate(PipeInputs::from_field_units(4.0, 60.0, 0.5), &mut rng)
            .unwrap();

        let samples = session.samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].regime(), Regime::Turbulent);
        assert_eq!(samples[1].regime(), Regime::Laminar);
        assert!(session.points()[0].head_loss_per_foot > 0.0);
    }

    #[test]
    fn failed_entry_is_not_recorded() {
        let mut session = Session::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = session
            .evaluate(PipeInputs::from_field_units(-1.0, 60.0, 10.0), &mut rng)
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));

        // zero flow gives Re = 0
        let err = session
            .evaluate(PipeInputs::from_field_units(2.0, 60.0, 0.0), &mut rng)
            .unwrap_err();
        assert!(err.is_recoverable());
        assert!(session.is_empty());
    }

    #[test]
    fn show_chart_overlays_every_point() {
        let mut session = Session::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session
            .evaluate(PipeInputs::from_field_units(6.0, 600.0, 300.0), &mut rng)
            .unwrap();

        let mut display = RecordingDisplay::new();
        let chart = session
            .show_chart(&MoodyChartRenderer::default(), &mut display)
            .unwrap();
        assert_eq!(chart.markers().len(), 1);
        assert_eq!(display.shown.len(), 1);
    }
}
