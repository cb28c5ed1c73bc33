//! Line-oriented prompting over any reader/writer pair.

use crate::error::{AppError, AppResult};
use crate::pipe::PipeInputs;
use crate::session::Session;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::warn;

pub const DIAMETER_PROMPT: &str = "Enter the pipe diameter in inches: ";
pub const ROUGHNESS_PROMPT: &str = "Enter the pipe roughness in micro-inches: ";
pub const FLOW_PROMPT: &str = "Enter the flow rate in gallons per minute: ";
pub const CONTINUE_PROMPT: &str = "Do you want to continue adding parameters? (yes/no): ";

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

/// Read one number. Unparseable text is a [`AppError::Parse`] naming `field`.
pub fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> AppResult<f64> {
    let line = read_line(input, output, prompt)?;
    line.parse::<f64>().map_err(|_| AppError::Parse {
        field: field.to_string(),
        input: line,
    })
}

/// Like [`read_f64`], but asks again until the text parses.
pub fn read_f64_retrying<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> AppResult<f64> {
    loop {
        match read_f64(input, output, prompt, field) {
            Err(err @ AppError::Parse { .. }) => writeln!(output, "{err}")?,
            other => return other,
        }
    }
}

/// `yes` or `y` (any case) continues; anything else stops.
pub fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<bool> {
    let answer = read_line(input, output, prompt)?.to_ascii_lowercase();
    Ok(answer == "yes" || answer == "y")
}

pub fn read_pipe_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> AppResult<PipeInputs> {
    let diameter = read_f64_retrying(input, output, DIAMETER_PROMPT, "diameter")?;
    let roughness = read_f64_retrying(input, output, ROUGHNESS_PROMPT, "roughness")?;
    let flow = read_f64_retrying(input, output, FLOW_PROMPT, "flow rate")?;
    Ok(PipeInputs::from_field_units(diameter, roughness, flow))
}

/// Prompt for pipes until the user declines or input ends, printing the
/// head loss for each. Bad entries are reported and skipped.
pub fn run_session<R, W, G>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        let step = read_pipe_inputs(input, output).and_then(|inputs| {
            let point = session.evaluate(inputs, rng)?;
            writeln!(
                output,
                "Head loss per foot: {:.6} ft/ft",
                point.head_loss_per_foot
            )?;
            Ok(())
        });

        match step {
            Ok(()) => {}
            Err(AppError::EndOfInput) => return Ok(()),
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "entry rejected");
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err),
        }

        match read_yes_no(input, output, CONTINUE_PROMPT) {
            Ok(true) => {}
            Ok(false) | Err(AppError::EndOfInput) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}
