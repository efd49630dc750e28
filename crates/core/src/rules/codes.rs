//! Well-known rule codes read by the engine.
//!
//! Every legally mutable number is a rule row under one of these codes.
//! The only structural constant is the number of PIT bracket slots.

/// Cash payments at or above this amount lose their input VAT.
pub const VAT_CASH_LIMIT: &str = "VAT_CASH_LIMIT";
/// Entertainment spend per person above which a warning is raised.
pub const VAT_ENTERTAINMENT_PER_PERSON: &str = "VAT_ENTERTAINMENT_PER_PERSON";
/// Vehicles with fewer seats than this lose their input VAT.
pub const VAT_VEHICLE_MIN_SEATS: &str = "VAT_VEHICLE_MIN_SEATS";
/// Invoices older than this many years cannot be declared.
pub const VAT_INVOICE_RETENTION_YEARS: &str = "VAT_INVOICE_RETENTION_YEARS";
/// Prefix of partial-deduction ratio rules, followed by the usage category.
pub const VAT_PARTIAL_PREFIX: &str = "VAT_PARTIAL_";

/// Deductible depreciation base cap for passenger vehicles.
pub const CIT_VEHICLE_CAP: &str = "CIT_VEHICLE_CAP";
/// Statutory corporate income tax rate.
pub const CIT_STANDARD_RATE: &str = "CIT_STANDARD_RATE";
/// Deductible entertainment spend per tax period.
pub const CIT_ENTERTAINMENT_CAP: &str = "CIT_ENTERTAINMENT_CAP";

/// Employee social insurance rate.
pub const INS_EMPLOYEE_BHXH_RATE: &str = "INS_EMPLOYEE_BHXH_RATE";
/// Employee health insurance rate.
pub const INS_EMPLOYEE_BHYT_RATE: &str = "INS_EMPLOYEE_BHYT_RATE";
/// Employee unemployment insurance rate.
pub const INS_EMPLOYEE_BHTN_RATE: &str = "INS_EMPLOYEE_BHTN_RATE";
/// Employer social insurance rate.
pub const INS_EMPLOYER_BHXH_RATE: &str = "INS_EMPLOYER_BHXH_RATE";
/// Employer health insurance rate.
pub const INS_EMPLOYER_BHYT_RATE: &str = "INS_EMPLOYER_BHYT_RATE";
/// Employer unemployment insurance rate.
pub const INS_EMPLOYER_BHTN_RATE: &str = "INS_EMPLOYER_BHTN_RATE";
/// Employer occupational accident insurance rate.
pub const INS_EMPLOYER_BHTNLD_RATE: &str = "INS_EMPLOYER_BHTNLD_RATE";
/// Ceiling on the contribution base.
pub const INS_MAX_BASE: &str = "INS_MAX_BASE";

/// Weekday overtime multiplier.
pub const PAY_OT_NORMAL_RATE: &str = "PAY_OT_NORMAL_RATE";
/// Weekend overtime multiplier.
pub const PAY_OT_WEEKEND_RATE: &str = "PAY_OT_WEEKEND_RATE";
/// Public holiday overtime multiplier.
pub const PAY_OT_HOLIDAY_RATE: &str = "PAY_OT_HOLIDAY_RATE";
/// Night shift bonus multiplier.
pub const PAY_NIGHT_BONUS_RATE: &str = "PAY_NIGHT_BONUS_RATE";

/// Monthly personal (self) deduction for PIT.
pub const PIT_PERSONAL_DEDUCTION: &str = "PIT_PERSONAL_DEDUCTION";
/// Monthly deduction per registered dependent for PIT.
pub const PIT_DEPENDENT_DEDUCTION: &str = "PIT_DEPENDENT_DEDUCTION";

/// Number of PIT bracket slots the registry is searched for.
pub const PIT_BRACKET_SLOTS: usize = 7;

/// Code of the marginal rate of PIT bracket `slot` (1-based).
#[must_use]
pub fn pit_bracket_rate(slot: usize) -> String {
    format!("PIT_BRACKET_{slot}_RATE")
}

/// Code of the upper bound of PIT bracket `slot` (1-based).
///
/// The top bracket has no upper bound rule.
#[must_use]
pub fn pit_bracket_upper(slot: usize) -> String {
    format!("PIT_BRACKET_{slot}_UPPER")
}

/// Code of the partial-deduction ratio for a VAT usage category.
#[must_use]
pub fn vat_partial(category: &str) -> String {
    format!("{VAT_PARTIAL_PREFIX}{}", category.trim().to_uppercase())
}

/// Scalar codes that must resolve for every evaluation date.
pub const REQUIRED: &[&str] = &[
    VAT_CASH_LIMIT,
    VAT_ENTERTAINMENT_PER_PERSON,
    VAT_VEHICLE_MIN_SEATS,
    VAT_INVOICE_RETENTION_YEARS,
    CIT_VEHICLE_CAP,
    CIT_STANDARD_RATE,
    CIT_ENTERTAINMENT_CAP,
    INS_EMPLOYEE_BHXH_RATE,
    INS_EMPLOYEE_BHYT_RATE,
    INS_EMPLOYEE_BHTN_RATE,
    INS_EMPLOYER_BHXH_RATE,
    INS_EMPLOYER_BHYT_RATE,
    INS_EMPLOYER_BHTN_RATE,
    INS_EMPLOYER_BHTNLD_RATE,
    INS_MAX_BASE,
    PAY_OT_NORMAL_RATE,
    PAY_OT_WEEKEND_RATE,
    PAY_OT_HOLIDAY_RATE,
    PAY_NIGHT_BONUS_RATE,
    PIT_PERSONAL_DEDUCTION,
    PIT_DEPENDENT_DEDUCTION,
];
