//! Rule resolution against an immutable snapshot of the rule store.
//!
//! A snapshot is taken once per batch so every entity in the batch sees the
//! same rule set, even if the store changes underneath.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use super::error::RuleError;
use super::types::TaxRule;

/// Resolves the rule in effect for a code on a date.
///
/// Implemented by [`RuleSnapshot`]; callers inject it into every calculator
/// that needs rules.
pub trait RuleResolver: Send + Sync {
    /// Returns the single active rule for `code` effective on `as_of`.
    ///
    /// # Errors
    ///
    /// - `RuleError::NotConfigured` when nothing matches
    /// - `RuleError::Ambiguous` when more than one rule matches
    fn resolve(&self, code: &str, as_of: NaiveDate) -> Result<&TaxRule, RuleError>;

    /// Like [`RuleResolver::resolve`] but treats a missing rule as `None`.
    ///
    /// Ambiguity is still an error.
    fn try_resolve(&self, code: &str, as_of: NaiveDate) -> Result<Option<&TaxRule>, RuleError> {
        match self.resolve(code, as_of) {
            Ok(rule) => Ok(Some(rule)),
            Err(RuleError::NotConfigured { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// An integrity problem found by [`RuleSnapshot::audit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Two active rules with the same code have overlapping windows.
    OverlappingWindows {
        /// Rule code.
        code: String,
        /// Start of the first window.
        first_from: NaiveDate,
        /// Start of the second window.
        second_from: NaiveDate,
    },
    /// A rule ends before it starts.
    InvertedWindow {
        /// Rule code.
        code: String,
        /// Window start.
        from: NaiveDate,
        /// Window end.
        until: NaiveDate,
    },
}

impl IntegrityIssue {
    /// Returns the issue code.
    #[must_use]
    pub fn issue_code(&self) -> &'static str {
        match self {
            Self::OverlappingWindows { .. } => "RULE_WINDOWS_OVERLAP",
            Self::InvertedWindow { .. } => "RULE_WINDOW_INVERTED",
        }
    }

    /// Returns the affected rule code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::OverlappingWindows { code, .. } | Self::InvertedWindow { code, .. } => code,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RuleDocument {
    #[serde(default)]
    rules: Vec<TaxRule>,
}

/// Immutable in-memory copy of the rule store.
#[derive(Debug, Clone, Default)]
pub struct RuleSnapshot {
    rules: BTreeMap<String, Vec<TaxRule>>,
}

impl RuleSnapshot {
    /// Builds a snapshot from rule records.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = TaxRule>) -> Self {
        let mut grouped: BTreeMap<String, Vec<TaxRule>> = BTreeMap::new();
        for rule in rules {
            grouped.entry(rule.code.clone()).or_default().push(rule);
        }
        for versions in grouped.values_mut() {
            versions.sort_by_key(|rule| rule.effective_from);
        }
        Self { rules: grouped }
    }

    /// Parses a TOML snapshot document with a `[[rules]]` array.
    pub fn from_toml_str(document: &str) -> Result<Self, RuleError> {
        let parsed: RuleDocument = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(Self::new(parsed.rules))
    }

    /// Reads a TOML snapshot document from disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let parsed: RuleDocument = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        debug!(path = %path.display(), rules = parsed.rules.len(), "loaded rule snapshot");
        Ok(Self::new(parsed.rules))
    }

    /// Total number of rule records, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Returns true if the snapshot holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct rule codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Finds configuration problems that would make resolution fail or lie.
    #[must_use]
    pub fn audit(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        for (code, versions) in &self.rules {
            for rule in versions {
                if let Some(until) = rule.effective_until
                    && until < rule.effective_from
                {
                    issues.push(IntegrityIssue::InvertedWindow {
                        code: code.clone(),
                        from: rule.effective_from,
                        until,
                    });
                }
            }

            let active: Vec<&TaxRule> = versions.iter().filter(|r| r.is_active).collect();
            for (i, first) in active.iter().enumerate() {
                for second in &active[i + 1..] {
                    if first.window_overlaps(second) {
                        issues.push(IntegrityIssue::OverlappingWindows {
                            code: code.clone(),
                            first_from: first.effective_from,
                            second_from: second.effective_from,
                        });
                    }
                }
            }
        }
        issues
    }
}

impl RuleResolver for RuleSnapshot {
    fn resolve(&self, code: &str, as_of: NaiveDate) -> Result<&TaxRule, RuleError> {
        let mut matches = self
            .rules
            .get(code)
            .into_iter()
            .flatten()
            .filter(|rule| rule.is_effective_on(as_of));

        let Some(rule) = matches.next() else {
            return Err(RuleError::NotConfigured {
                code: code.to_string(),
                as_of,
            });
        };

        let extra = matches.count();
        if extra > 0 {
            return Err(RuleError::Ambiguous {
                code: code.to_string(),
                as_of,
                matches: extra + 1,
            });
        }

        debug!(code, %as_of, value = ?rule.value, "resolved rule");
        Ok(rule)
    }
}
