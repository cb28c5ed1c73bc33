//! mf-app: the interactive pipe session shared by the CLI and the GUI.
//!
//! Reads pipe diameter, roughness and flow rate, works out the Reynolds
//! number and relative roughness for water, evaluates the friction factor
//! and head loss, and keeps every operating point for the final chart.

pub mod error;
pub mod pipe;
pub mod prompt;
pub mod session;

pub use error::{AppError, AppResult};
pub use pipe::{PipeFlow, PipeInputs, WaterProperties, head_loss_per_foot};
pub use prompt::{
    CONTINUE_PROMPT, DIAMETER_PROMPT, FLOW_PROMPT, ROUGHNESS_PROMPT, read_f64, read_f64_retrying,
    read_pipe_inputs, read_yes_no, run_session,
};
pub use session::{OperatingPoint, Session};
