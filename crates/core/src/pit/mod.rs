//! Personal income tax.
//!
//! This module implements:
//! - Validated progressive bracket tables loaded from rules
//! - Cumulative progressive tax with a single terminal rounding
//! - Marginal rate lookup

pub mod bracket;
pub mod calculator;

#[cfg(test)]
mod calculator_props;

pub use bracket::{BracketTable, TaxBracket};
pub use calculator::{marginal_rate, progressive_tax};
