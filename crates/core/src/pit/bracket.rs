//! Progressive bracket tables.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Rate};
use serde::{Deserialize, Serialize};

use crate::rules::codes;
use crate::rules::{RuleError, RuleResolver};

/// One slice of a progressive schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of the slice; `None` for the open top bracket.
    pub upper_bound: Option<Money>,
    /// Marginal rate applied inside the slice.
    pub rate: Rate,
}

/// Ordered, non-overlapping brackets covering `[0, ∞)`.
///
/// Invariants (checked by [`BracketTable::new`]):
/// - at least one bracket
/// - bounded upper bounds are positive and strictly increase
/// - exactly the last bracket is unbounded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates and wraps a bracket list.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, RuleError> {
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(RuleError::InvalidBracketTable("no brackets".into()));
        };
        if last.upper_bound.is_some() {
            return Err(RuleError::InvalidBracketTable(
                "top bracket must be unbounded".into(),
            ));
        }

        let mut previous = Money::ZERO;
        for (i, bracket) in bounded.iter().enumerate() {
            let Some(bound) = bracket.upper_bound else {
                return Err(RuleError::InvalidBracketTable(format!(
                    "bracket {} is unbounded but not last",
                    i + 1
                )));
            };
            if bound <= previous {
                return Err(RuleError::InvalidBracketTable(format!(
                    "bracket {} upper bound {bound} does not exceed {previous}",
                    i + 1
                )));
            }
            previous = bound;
        }

        Ok(Self { brackets })
    }

    /// Loads the PIT schedule effective on `as_of`.
    ///
    /// Slots are read in order until a slot has no rate rule. A slot without
    /// an upper bound rule is the open top bracket.
    pub fn from_rules(rules: &dyn RuleResolver, as_of: NaiveDate) -> Result<Self, RuleError> {
        let mut brackets = Vec::with_capacity(codes::PIT_BRACKET_SLOTS);
        for slot in 1..=codes::PIT_BRACKET_SLOTS {
            let rate_code = codes::pit_bracket_rate(slot);
            let rate = if slot == 1 {
                rules.resolve(&rate_code, as_of)?.rate()?
            } else {
                match rules.try_resolve(&rate_code, as_of)? {
                    Some(rule) => rule.rate()?,
                    None => break,
                }
            };

            let upper_bound = rules
                .try_resolve(&codes::pit_bracket_upper(slot), as_of)?
                .map(|rule| rule.amount())
                .transpose()?;

            brackets.push(TaxBracket { upper_bound, rate });
            if upper_bound.is_none() {
                break;
            }
        }
        Self::new(brackets)
    }

    /// Brackets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxBracket> {
        self.brackets.iter()
    }

    /// Number of brackets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Always false; a valid table has at least one bracket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Highest marginal rate in the table.
    #[must_use]
    pub fn top_rate(&self) -> Rate {
        self.brackets
            .iter()
            .map(|b| b.rate)
            .max()
            .unwrap_or(Rate::ZERO)
    }
}
