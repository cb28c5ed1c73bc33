//! End-to-end session: typed input through to the overlaid chart.

use mf_app::{Session, run_session};
use mf_chart::{MarkerShape, MoodyChartRenderer, RecordingDisplay};
use mf_friction::Regime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn run(script: &str, seed: u64) -> (Session, String) {
    let mut session = Session::default();
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    run_session(&mut session, &mut input, &mut output, &mut rng).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn three_regimes_in_one_session() {
    // 6 in @ 300 gpm (turbulent), 2 in @ 2 gpm (transitional), 4 in @ 0.5 gpm (laminar)
    let script = "6\n600\n300\nyes\n2\n60\n2\nyes\n4\n60\n0.5\nno\n";
    let (session, text) = run(script, 11);

    let regimes: Vec<Regime> = session.samples().iter().map(|s| s.regime()).collect();
    assert_eq!(
        regimes,
        vec![Regime::Turbulent, Regime::Transitional, Regime::Laminar]
    );
    assert_eq!(text.matches("Head loss per foot:").count(), 3);

    let mut display = RecordingDisplay::new();
    let chart = session
        .show_chart(&MoodyChartRenderer::default(), &mut display)
        .unwrap();
    let shapes: Vec<MarkerShape> = chart.markers().iter().map(|m| m.style.shape).collect();
    assert_eq!(
        shapes,
        vec![
            MarkerShape::Circle,
            MarkerShape::TriangleUp,
            MarkerShape::Circle
        ]
    );
}

#[test]
fn head_loss_is_printed_with_six_decimals() {
    let (session, text) = run("6\n600\n300\nno\n", 0);
    let expected = format!(
        "Head loss per foot: {:.6} ft/ft",
        session.points()[0].head_loss_per_foot
    );
    assert!(text.contains(&expected), "{text}");
}

#[test]
fn same_seed_same_transitional_value() {
    let script = "2\n60\n2\nno\n";
    let (a, _) = run(script, 42);
    let (b, _) = run(script, 42);
    assert_eq!(
        a.samples()[0].friction_factor(),
        b.samples()[0].friction_factor()
    );
}

#[test]
fn typo_is_asked_again() {
    let (session, text) = run("six\n6\n600\n300\nno\n", 0);
    assert_eq!(session.len(), 1);
    assert!(text.contains("Invalid number for diameter"));
}
