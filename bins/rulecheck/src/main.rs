//! Nongsan rule check
//!
//! Loads the configured rule snapshot and verifies that every rule the
//! engine reads resolves for the evaluation date. Exits non-zero when the
//! snapshot has configuration problems.
//!
//! Usage: cargo run --bin rulecheck

use anyhow::Context;
use chrono::NaiveDate;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nongsan_core::payroll::PayrollRuleSnapshot;
use nongsan_core::rules::{RuleResolver, RuleSnapshot, TaxRule, codes};
use nongsan_shared::{AppConfig, AppResult};
use nongsan_shared::config::LoggingConfig;

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn resolve_required<'a>(
    snapshot: &'a RuleSnapshot,
    code: &str,
    as_of: NaiveDate,
) -> AppResult<&'a TaxRule> {
    Ok(snapshot.resolve(code, as_of)?)
}

fn build_payroll_rules(
    snapshot: &RuleSnapshot,
    as_of: NaiveDate,
) -> AppResult<PayrollRuleSnapshot> {
    Ok(PayrollRuleSnapshot::resolve(snapshot, as_of)?)
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    if let Some(threads) = config.engine.parallelism {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let as_of = config.as_of(chrono::Local::now().date_naive());
    let snapshot = RuleSnapshot::from_toml_file(&config.rules.path)
        .with_context(|| format!("failed to load rules from {}", config.rules.path))?;
    info!(
        path = %config.rules.path,
        rules = snapshot.len(),
        codes = snapshot.codes().count(),
        %as_of,
        "Rule snapshot loaded"
    );

    let mut problems = 0usize;

    for issue in snapshot.audit() {
        error!(code = issue.code(), issue = issue.issue_code(), ?issue, "Integrity issue");
        problems += 1;
    }

    for &code in codes::REQUIRED {
        match resolve_required(&snapshot, code, as_of) {
            Ok(rule) => info!(
                code,
                value = ?rule.value,
                effective_from = %rule.effective_from,
                "Resolved"
            ),
            Err(err) => {
                error!(
                    code,
                    category = %err.category(),
                    error_code = err.error_code(),
                    error = %err,
                    "Unresolved"
                );
                problems += 1;
            }
        }
    }

    match build_payroll_rules(&snapshot, as_of) {
        Ok(payroll) => info!(
            brackets = payroll.brackets.len(),
            top_rate = %payroll.brackets.top_rate(),
            employee_rate = %payroll.insurance.employee_rate(),
            max_insurance_base = %payroll.insurance.max_insurance_base,
            "Payroll rules build"
        ),
        Err(err) => {
            error!(
                category = %err.category(),
                error_code = err.error_code(),
                error = %err,
                "Payroll rules do not build"
            );
            problems += 1;
        }
    }

    if problems > 0 {
        anyhow::bail!("{problems} configuration problem(s) in {}", config.rules.path);
    }
    info!("Rule snapshot is consistent");
    Ok(())
}
