//! Parallel payroll runs.

use nongsan_shared::types::{Money, WorkerId};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use super::composer::PayrollRuleSnapshot;
use super::error::PayrollError;
use super::types::{PayrollResult, WorkerPeriodFacts};

/// Outcome for one worker in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    /// Worker the outcome belongs to.
    pub worker_id: WorkerId,
    /// Computed payroll or the reason it was rejected.
    pub result: Result<PayrollResult, PayrollError>,
}

/// Sums over the successfully computed workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PayrollTotals {
    /// Workers computed.
    pub workers: usize,
    /// Total gross pay.
    pub gross: Money,
    /// Total net pay.
    pub net: Money,
    /// Total PIT withheld.
    pub tax: Money,
    /// Total employee insurance withheld.
    pub employee_insurance: Money,
    /// Total employer insurance.
    pub employer_insurance: Money,
}

impl PayrollTotals {
    fn add(mut self, result: &PayrollResult) -> Self {
        self.workers += 1;
        self.gross += result.gross;
        self.net += result.net;
        self.tax += result.tax_amount;
        self.employee_insurance += result.employee_insurance();
        self.employer_insurance += result.employer_insurance();
        self
    }
}

/// Result of a payroll batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollBatchReport {
    /// One outcome per input, in input order.
    pub outcomes: Vec<WorkerOutcome>,
    /// Totals over the computed workers.
    pub totals: PayrollTotals,
}

impl PayrollBatchReport {
    /// Workers that were rejected, with their errors.
    pub fn rejected(&self) -> impl Iterator<Item = (WorkerId, &PayrollError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.worker_id, e)))
    }

    /// Computed payroll results.
    pub fn computed(&self) -> impl Iterator<Item = &PayrollResult> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}

/// Composes every worker in parallel against one rule snapshot.
///
/// A rejected worker is reported in its outcome and never stops the batch.
#[must_use]
pub fn run_payroll_batch(
    facts: &[WorkerPeriodFacts],
    snapshot: &PayrollRuleSnapshot,
) -> PayrollBatchReport {
    let outcomes: Vec<WorkerOutcome> = facts
        .par_iter()
        .map(|worker| {
            let result = snapshot.compose(worker);
            if let Err(err) = &result {
                warn!(
                    worker_id = %worker.worker_id,
                    period = %worker.period,
                    code = err.error_code(),
                    error = %err,
                    "payroll rejected"
                );
            }
            WorkerOutcome {
                worker_id: worker.worker_id,
                result,
            }
        })
        .collect();

    let totals = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .fold(PayrollTotals::default(), PayrollTotals::add);

    info!(
        as_of = %snapshot.as_of,
        workers = facts.len(),
        computed = totals.workers,
        rejected = facts.len() - totals.workers,
        gross = %totals.gross,
        net = %totals.net,
        "payroll batch computed"
    );

    PayrollBatchReport { outcomes, totals }
}
