//! Error types for chart construction and display.

use mf_core::CoreError;
use mf_friction::FrictionError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Friction factor error: {0}")]
    Friction(#[from] FrictionError),

    #[error("Grid error: {0}")]
    Grid(#[from] CoreError),

    #[error("Point ({x}, {y}) cannot be drawn on log axes")]
    InvalidPoint { x: f64, y: f64 },

    #[error("Display error: {message}")]
    Display { message: String },
}

pub type ChartResult<T> = Result<T, ChartError>;
