//! VAT invoice facts and validation outcomes.

use std::fmt;

use chrono::NaiveDate;
use nongsan_shared::types::{InvoiceId, Money, Rate};
use serde::{Deserialize, Serialize};

/// How the invoice was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Debit or credit card.
    Card,
    /// E-wallet.
    EWallet,
}

impl PaymentMethod {
    /// Whether the payment left no banking trail.
    #[must_use]
    pub const fn is_cash(self) -> bool {
        match self {
            Self::Cash => true,
            Self::BankTransfer | Self::Card | Self::EWallet => false,
        }
    }
}

/// A purchase invoice with input VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatInvoiceFacts {
    /// Invoice.
    pub id: InvoiceId,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Printed invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Supplier tax code (MST).
    #[serde(default)]
    pub supplier_tax_code: Option<String>,
    /// Value before VAT.
    pub goods_value: Money,
    /// VAT rate printed on the invoice.
    pub vat_rate: Rate,
    /// VAT amount printed on the invoice.
    pub vat_amount: Money,
    /// Amount paid, VAT included.
    pub total_amount: Money,
    /// How the invoice was settled.
    pub payment_method: PaymentMethod,
    /// Purchase of a passenger vehicle.
    #[serde(default)]
    pub is_vehicle: bool,
    /// Seats of the vehicle, required when `is_vehicle`.
    #[serde(default)]
    pub vehicle_seats: Option<u32>,
    /// Entertainment spend.
    #[serde(default)]
    pub is_entertainment: bool,
    /// Head count, required when `is_entertainment`.
    #[serde(default)]
    pub number_of_persons: Option<u32>,
    /// Usage category for partial deduction, e.g. `MIXED`.
    #[serde(default)]
    pub usage_category: Option<String>,
}

impl VatInvoiceFacts {
    /// A plain invoice settled by bank transfer.
    #[must_use]
    pub fn new(
        invoice_date: NaiveDate,
        supplier_tax_code: impl Into<String>,
        goods_value: Money,
        vat_rate: Rate,
    ) -> Self {
        let vat_amount = Money::round(goods_value.times(vat_rate));
        Self {
            id: InvoiceId::new(),
            invoice_date,
            invoice_number: None,
            supplier_tax_code: Some(supplier_tax_code.into()),
            goods_value,
            vat_rate,
            vat_amount,
            total_amount: goods_value + vat_amount,
            payment_method: PaymentMethod::BankTransfer,
            is_vehicle: false,
            vehicle_seats: None,
            is_entertainment: false,
            number_of_persons: None,
            usage_category: None,
        }
    }

    /// Sets the invoice number.
    #[must_use]
    pub fn numbered(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = Some(number.into());
        self
    }

    /// Sets the payment method.
    #[must_use]
    pub fn paid_by(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }
}

/// Whether an issue blocks the deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Blocks the deduction.
    Error,
    /// Informational.
    Warning,
}

/// Stable codes of VAT check outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatIssueCode {
    /// No supplier tax code.
    #[serde(rename = "MISSING_SUPPLIER_MST")]
    MissingSupplierMst,
    /// Older than the retention window.
    #[serde(rename = "INVOICE_EXPIRED")]
    InvoiceExpired,
    /// Cash payment at or above the ceiling.
    #[serde(rename = "CASH_PAYMENT_OVER_LIMIT")]
    CashPaymentOverLimit,
    /// Passenger vehicle below the seat threshold.
    #[serde(rename = "VEHICLE_UNDER_9_SEATS")]
    VehicleUnder9Seats,
    /// Entertainment spend per person above the cap.
    #[serde(rename = "ENTERTAINMENT_EXCEEDED")]
    EntertainmentExceeded,
    /// No invoice number.
    #[serde(rename = "MISSING_INVOICE_NUMBER")]
    MissingInvoiceNumber,
    /// Declared VAT differs from goods value times rate.
    #[serde(rename = "VAT_AMOUNT_MISMATCH")]
    VatAmountMismatch,
}

impl VatIssueCode {
    /// Returns the stable code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingSupplierMst => "MISSING_SUPPLIER_MST",
            Self::InvoiceExpired => "INVOICE_EXPIRED",
            Self::CashPaymentOverLimit => "CASH_PAYMENT_OVER_LIMIT",
            Self::VehicleUnder9Seats => "VEHICLE_UNDER_9_SEATS",
            Self::EntertainmentExceeded => "ENTERTAINMENT_EXCEEDED",
            Self::MissingInvoiceNumber => "MISSING_INVOICE_NUMBER",
            Self::VatAmountMismatch => "VAT_AMOUNT_MISMATCH",
        }
    }

    /// Whether the issue blocks the deduction.
    #[must_use]
    pub const fn severity(self) -> IssueSeverity {
        match self {
            Self::MissingSupplierMst
            | Self::InvoiceExpired
            | Self::CashPaymentOverLimit
            | Self::VehicleUnder9Seats => IssueSeverity::Error,
            Self::EntertainmentExceeded | Self::MissingInvoiceNumber | Self::VatAmountMismatch => {
                IssueSeverity::Warning
            }
        }
    }
}

impl fmt::Display for VatIssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One check outcome with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatIssue {
    /// Stable code.
    pub code: VatIssueCode,
    /// Explanation.
    pub message: String,
}

/// Verdict on one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatValidationResult {
    /// False when any error was raised.
    pub is_deductible: bool,
    /// True when a partial-deduction ratio applied.
    pub is_partial: bool,
    /// Ratio applied for partial deduction.
    pub deduction_ratio: Option<Rate>,
    /// Input VAT that may be credited.
    pub deductible_amount: Money,
    /// Input VAT that may not be credited.
    pub non_deductible_amount: Money,
    /// Blocking issues.
    pub errors: Vec<VatIssue>,
    /// Informational issues.
    pub warnings: Vec<VatIssue>,
}

impl VatValidationResult {
    /// Whether an issue with the given code was raised.
    #[must_use]
    pub fn has(&self, code: VatIssueCode) -> bool {
        self.errors
            .iter()
            .chain(&self.warnings)
            .any(|issue| issue.code == code)
    }
}
