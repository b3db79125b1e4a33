//! BMI Core - BMI calculation engine
//!
//! This crate provides the logical core of the BMI calculator:
//! - `WeightUnit` / `HeightUnit`: input units with canonical conversion
//! - `BmiCategory`: five-bucket classification with display colors
//! - `calculate`: pure text-in, result-out BMI computation
//! - `format_report` / `Exporter`: shareable report and its hand-off seam
//!
//! Every operation is a pure, synchronous function; invalid input is
//! signaled by a sentinel result (BMI 0.0, category Invalid), never by a
//! panic or a separate error channel.

mod category;
mod engine;
mod report;
mod unit;

pub use category::{BmiCategory, CategoryColor};
pub use engine::{calculate, BmiInput, BmiResult};
pub use report::{format_report, share_report, Exporter};
pub use unit::{HeightUnit, UnitParseError, WeightUnit};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        calculate, format_report, BmiCategory, BmiInput, BmiResult, CategoryColor, HeightUnit,
        WeightUnit,
    };
}
