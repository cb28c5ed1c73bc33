use clap::{Parser, Subcommand};
use mf_app::{AppResult, Session, run_session};
use mf_chart::{ChartDisplay, MoodyChartRenderer, SummaryDisplay};
use mf_friction::{FlowSample, FrictionEngine};
use mf_ui::EguiDisplay;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use tracing::Level;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Moody diagram and pipe head loss calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for transitional friction factor draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a text summary of the chart instead of opening a window
    #[arg(long, global = true)]
    no_window: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter pipes interactively, then plot them on the Moody diagram (default)
    Session,
    /// Show the Moody diagram without operating points
    Chart {
        /// Write the chart model as JSON to stdout
        #[arg(long)]
        json: bool,
    },
    /// Friction factor for one Reynolds number and relative roughness
    Ff {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Relative roughness ε/d
        #[arg(long)]
        rr: f64,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let mut display: Box<dyn ChartDisplay> = if cli.no_window {
        Box::new(SummaryDisplay::new(io::stdout()))
    } else {
        Box::new(EguiDisplay::default())
    };

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cmd_session(&mut rng, display.as_mut()),
        Commands::Chart { json } => cmd_chart(json, display.as_mut()),
        Commands::Ff { re, rr } => cmd_ff(re, rr, &mut rng),
    }
}

fn cmd_session(rng: &mut ChaCha8Rng, display: &mut dyn ChartDisplay) -> AppResult<()> {
    let mut session = Session::default();
    {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        run_session(&mut session, &mut input, &mut output, rng)?;
    }

    println!("Plotting {} operating point(s)", session.len());
    session.show_chart(&MoodyChartRenderer::default(), display)?;
    Ok(())
}

fn cmd_chart(json: bool, display: &mut dyn ChartDisplay) -> AppResult<()> {
    let chart = MoodyChartRenderer::default().render_base_diagram()?;
    if json {
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &chart).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }
    display.show(&chart)?;
    Ok(())
}

fn cmd_ff(re: f64, rr: f64, rng: &mut ChaCha8Rng) -> AppResult<()> {
    let sample = FlowSample::evaluate(&FrictionEngine::default(), re, rr, rng)?;
    println!("Regime: {}", sample.regime());
    println!("Friction factor: {:.6}", sample.friction_factor());
    Ok(())
}
