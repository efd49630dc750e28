//! Input VAT deductibility checks.

use chrono::{Months, NaiveDate};
use nongsan_shared::types::{Money, Rate};
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::VatError;
use super::types::{IssueSeverity, VatInvoiceFacts, VatIssue, VatIssueCode, VatValidationResult};
use crate::rules::codes;
use crate::rules::{RuleError, RuleResolver};

/// Rejects invoice facts the checks cannot use.
pub fn validate_invoice_facts(invoice: &VatInvoiceFacts) -> Result<(), VatError> {
    let negative = |field: &'static str| VatError::InvalidFacts {
        field,
        reason: "must not be negative",
    };
    if invoice.goods_value.is_negative() {
        return Err(negative("goods_value"));
    }
    if invoice.vat_amount.is_negative() {
        return Err(negative("vat_amount"));
    }
    if invoice.total_amount.is_negative() {
        return Err(negative("total_amount"));
    }
    if invoice.is_vehicle && invoice.vehicle_seats.is_none() {
        return Err(VatError::InvalidFacts {
            field: "vehicle_seats",
            reason: "is required for vehicles",
        });
    }
    if invoice.is_entertainment && invoice.number_of_persons.is_none_or(|n| n == 0) {
        return Err(VatError::InvalidFacts {
            field: "number_of_persons",
            reason: "must be positive for entertainment",
        });
    }
    Ok(())
}

/// Collects issues in check order.
#[derive(Default)]
struct Findings {
    errors: Vec<VatIssue>,
    warnings: Vec<VatIssue>,
}

impl Findings {
    fn raise(&mut self, code: VatIssueCode, message: String) {
        let issue = VatIssue { code, message };
        match code.severity() {
            IssueSeverity::Error => self.errors.push(issue),
            IssueSeverity::Warning => self.warnings.push(issue),
        }
    }
}

/// Runs every deductibility check on one invoice.
///
/// Checks are independent and all of them run; rules are only resolved for
/// checks that apply to the invoice. Any error makes the whole VAT amount
/// non-deductible. Without errors, a partial-deduction rule for the usage
/// category splits the amount; otherwise it is fully deductible.
pub fn validate_vat(
    invoice: &VatInvoiceFacts,
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Result<VatValidationResult, VatError> {
    validate_invoice_facts(invoice)?;
    let mut findings = Findings::default();

    let has_tax_code = invoice
        .supplier_tax_code
        .as_deref()
        .is_some_and(|code| !code.trim().is_empty());
    if !has_tax_code {
        findings.raise(
            VatIssueCode::MissingSupplierMst,
            "Invoice has no supplier tax code".into(),
        );
    }

    let has_number = invoice
        .invoice_number
        .as_deref()
        .is_some_and(|number| !number.trim().is_empty());
    if !has_number {
        findings.raise(
            VatIssueCode::MissingInvoiceNumber,
            "Invoice has no invoice number".into(),
        );
    }

    let retention_years = rules
        .resolve(codes::VAT_INVOICE_RETENTION_YEARS, as_of)?
        .count()?;
    let expired = as_of
        .checked_sub_months(Months::new(retention_years.saturating_mul(12)))
        .is_some_and(|cutoff| invoice.invoice_date < cutoff);
    if expired {
        findings.raise(
            VatIssueCode::InvoiceExpired,
            format!(
                "Invoice dated {} is older than {retention_years} years",
                invoice.invoice_date
            ),
        );
    }

    if invoice.payment_method.is_cash() {
        let limit = rules.resolve(codes::VAT_CASH_LIMIT, as_of)?.amount()?;
        if invoice.total_amount >= limit {
            findings.raise(
                VatIssueCode::CashPaymentOverLimit,
                format!(
                    "Cash payment of {} reaches the {limit} limit",
                    invoice.total_amount
                ),
            );
        }
    }

    if invoice.is_vehicle {
        let min_seats = rules.resolve(codes::VAT_VEHICLE_MIN_SEATS, as_of)?.count()?;
        let seats = invoice.vehicle_seats.unwrap_or_default();
        if seats < min_seats {
            findings.raise(
                VatIssueCode::VehicleUnder9Seats,
                format!("Vehicle has {seats} seats, fewer than {min_seats}"),
            );
        }
    }

    if invoice.is_entertainment {
        let cap = rules
            .resolve(codes::VAT_ENTERTAINMENT_PER_PERSON, as_of)?
            .amount()?;
        let persons = invoice.number_of_persons.unwrap_or(1).max(1);
        let per_person = invoice.total_amount.amount() / Decimal::from(persons);
        if per_person > cap.amount() {
            findings.raise(
                VatIssueCode::EntertainmentExceeded,
                format!(
                    "Entertainment spend of {} per person exceeds {cap}",
                    Money::round(per_person)
                ),
            );
        }
    }

    let expected_vat = Money::round(invoice.goods_value.times(invoice.vat_rate));
    if expected_vat != invoice.vat_amount {
        findings.raise(
            VatIssueCode::VatAmountMismatch,
            format!(
                "Declared VAT {} differs from {} at {}",
                invoice.vat_amount, expected_vat, invoice.vat_rate
            ),
        );
    }

    let result = if findings.errors.is_empty() {
        let ratio = partial_ratio(invoice, as_of, rules)?;
        let deductible = ratio.map_or(invoice.vat_amount, |ratio| {
            Money::round(invoice.vat_amount.times(ratio))
        });
        VatValidationResult {
            is_deductible: true,
            is_partial: ratio.is_some(),
            deduction_ratio: ratio,
            deductible_amount: deductible,
            non_deductible_amount: invoice.vat_amount - deductible,
            errors: findings.errors,
            warnings: findings.warnings,
        }
    } else {
        VatValidationResult {
            is_deductible: false,
            is_partial: false,
            deduction_ratio: None,
            deductible_amount: Money::ZERO,
            non_deductible_amount: invoice.vat_amount,
            errors: findings.errors,
            warnings: findings.warnings,
        }
    };

    debug!(
        invoice_id = %invoice.id,
        deductible = result.is_deductible,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated invoice"
    );
    Ok(result)
}

/// Deduction ratio for the invoice's usage category, if one is configured.
fn partial_ratio(
    invoice: &VatInvoiceFacts,
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Result<Option<Rate>, RuleError> {
    let Some(category) = invoice
        .usage_category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
    else {
        return Ok(None);
    };

    let code = codes::vat_partial(category);
    let Some(rule) = rules.try_resolve(&code, as_of)? else {
        return Ok(None);
    };
    let ratio = rule.rate()?;
    if ratio > Rate::ONE {
        return Err(RuleError::OutOfRange {
            code,
            reason: format!("deduction ratio {ratio} exceeds 100%"),
        });
    }
    Ok(Some(ratio))
}

/// Validates many invoices in parallel; one bad invoice never stops the rest.
#[must_use]
pub fn validate_vat_batch(
    invoices: &[VatInvoiceFacts],
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Vec<Result<VatValidationResult, VatError>> {
    let results: Vec<_> = invoices
        .par_iter()
        .map(|invoice| validate_vat(invoice, as_of, rules))
        .collect();

    let deductible = results
        .iter()
        .filter(|r| r.as_ref().is_ok_and(|v| v.is_deductible))
        .count();
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        %as_of,
        invoices = invoices.len(),
        deductible,
        failed,
        "validated invoice batch"
    );
    results
}
