//! Text rendering of calculation results.
//!
//! - [`terminal`] - Aligned label/value summary of a subnet plan

mod terminal;

pub use terminal::{format_field, plan_summary};
