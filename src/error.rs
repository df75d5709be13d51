//! Error types for the report calculation

use thiserror::Error;

/// Errors that abort a calculation run.
///
/// A reference to a cooler that does not exist is deliberately *not* an
/// error: its efficiency entry is omitted from the report.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The input document is unparseable, incomplete, or inconsistent.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Efficiency is undefined when the hot inlet equals the cooler inlet.
    #[error(
        "efficiency of flow '{flow}' against cooler '{cooler}' is undefined: \
         hot inlet equals cooler inlet ({temp} °C)"
    )]
    EfficiencyDivisionByZero {
        flow: String,
        cooler: String,
        temp: f64,
    },

    /// Water flow rate is undefined when the cooler's water-side
    /// temperatures are equal.
    #[error(
        "water flow rate of cooler '{cooler}' is undefined: \
         outlet temperature equals inlet temperature ({temp} °C)"
    )]
    WaterFlowDivisionByZero { cooler: String, temp: f64 },
}

impl CalcError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}
